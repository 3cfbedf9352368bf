// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for core module tests.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use crate::model::{ProcessModel, Summary, WorkItem, AREA_PATH_FIELD};
use crate::sheet::{Cell, Sheet};

/// Build a work item with the fields the engine cares about most.
pub fn make_item(id: &str, title: &str, item_type: &str, area_path: &str, level: usize) -> WorkItem {
    let mut custom_fields = BTreeMap::new();
    custom_fields.insert(AREA_PATH_FIELD.to_string(), area_path.to_string());
    WorkItem {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        work_item_type: item_type.to_string(),
        state: "New".to_string(),
        area_path: area_path.to_string(),
        iteration_path: String::new(),
        priority: 2,
        tags: String::new(),
        source_sheet: "Sheet1".to_string(),
        source_row: 0,
        hierarchy_level: level,
        catalog_status: None,
        process_sequence_id: None,
        source_model: None,
        original_id: None,
        custom_fields,
    }
}

/// Build a model around the given items with a freshly computed summary.
pub fn make_model(id: &str, filename: &str, items: Vec<WorkItem>) -> ProcessModel {
    let summary = Summary::for_ingest(&items, 1, vec!["Sheet1".to_string()]);
    ProcessModel {
        id: id.to_string(),
        filename: filename.to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        source: "upload".to_string(),
        work_items: items,
        summary,
    }
}

/// Build a raw (uncleaned) sheet from string cells; the first row is the header.
pub fn make_sheet(name: &str, rows: &[&[&str]]) -> Sheet {
    let grid: Vec<Vec<Cell>> = rows
        .iter()
        .map(|r| r.iter().map(|s| Cell::from(*s)).collect())
        .collect();
    Sheet::from_grid(name, grid)
}
