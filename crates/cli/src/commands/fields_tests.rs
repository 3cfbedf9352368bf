// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;

#[test]
fn lists_custom_columns() {
    let mut ctx = TestContext::new();
    let model = ctx.ingest_sample();

    let FieldListing::Names(names) = run_impl(&ctx.store, &model.id, None).unwrap() else {
        panic!("expected field names");
    };
    assert!(names.top_level.contains(&"state".to_string()));
    assert!(names.custom_fields.contains(&"Description".to_string()));
    assert!(names.custom_fields.contains(&"Area Path".to_string()));
}

#[test]
fn lists_distinct_values() {
    let mut ctx = TestContext::new();
    let model = ctx.ingest_sample();

    let listing = run_impl(&ctx.store, &model.id, Some("state")).unwrap();
    assert_eq!(
        listing,
        FieldListing::Values {
            field: "state".to_string(),
            values: vec!["Active".to_string(), "Closed".to_string(), "New".to_string()],
        }
    );
}
