// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::test_helpers::{make_item, make_model};
use chrono::Duration;
use tempfile::TempDir;

fn sample_model(id: &str) -> ProcessModel {
    let mut item = make_item("1", "Sell", "Epic", "Sell", 1);
    item.catalog_status = Some("Published".into());
    item.custom_fields.insert("Owner".into(), "Ops".into());
    make_model(id, "catalog.xlsx", vec![item, make_item("2", "Quote", "Feature", "Sell\\Quote", 2)])
}

#[test]
fn save_and_get_model() {
    let mut db = Database::open_in_memory().unwrap();
    let model = sample_model("m1");

    db.save(&model).unwrap();
    let retrieved = db.get("m1").unwrap().unwrap();

    assert_eq!(retrieved, model);
}

#[test]
fn get_missing_model() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get("missing").unwrap().is_none());
    assert!(matches!(db.load("missing"), Err(Error::ModelNotFound(_))));
}

#[test]
fn save_replaces_existing_model() {
    let mut db = Database::open_in_memory().unwrap();
    let mut model = sample_model("m1");
    db.save(&model).unwrap();

    model.work_items.pop();
    model.summary.refresh(&model.work_items);
    db.save(&model).unwrap();

    assert_eq!(db.count().unwrap(), 1);
    assert_eq!(db.load("m1").unwrap().work_items.len(), 1);
}

#[test]
fn list_newest_first_without_items() {
    let mut db = Database::open_in_memory().unwrap();
    let older = sample_model("a");
    let mut newer = sample_model("b");
    newer.created_at = older.created_at + Duration::days(1);
    db.save(&older).unwrap();
    db.save(&newer).unwrap();

    let listings = db.list().unwrap();
    let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(listings[0].summary.total_rows, 2);
}

#[test]
fn list_skips_corrupted_rows() {
    let mut db = Database::open_in_memory().unwrap();
    db.save(&sample_model("good")).unwrap();
    db.conn
        .execute(
            "INSERT INTO models (id, filename, created_at, source, summary, work_items)
             VALUES ('bad', 'x', 'not-a-date', 'upload', '{}', '[]')",
            [],
        )
        .unwrap();

    let ids: Vec<_> = db.list().unwrap().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["good"]);
    assert!(db.get("bad").is_err());
}

#[test]
fn delete_reports_existence() {
    let mut db = Database::open_in_memory().unwrap();
    db.save(&sample_model("m1")).unwrap();

    assert!(db.exists("m1").unwrap());
    assert!(db.delete("m1").unwrap());
    assert!(!db.exists("m1").unwrap());
    assert!(!db.delete("m1").unwrap());
}

#[test]
fn open_creates_parent_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("models.db");

    let mut db = Database::open(&path).unwrap();
    db.save(&sample_model("m1")).unwrap();
    drop(db);

    let reopened = Database::open(&path).unwrap();
    assert!(reopened.exists("m1").unwrap());
}

#[test]
fn migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    run_migrations(&db.conn).unwrap();
    run_migrations(&db.conn).unwrap();
}
