// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::display::format_tree;

#[test]
fn sample_catalog_nests_under_one_root() {
    let mut ctx = TestContext::new();
    let model = ctx.ingest_sample();
    let tree = run_impl(&ctx.store, &model.id).unwrap();

    assert_eq!(tree.total_items, 5);
    assert_eq!(tree.total_folders, 0);
    assert_eq!(tree.roots.len(), 1);

    let finance = &tree.roots[0];
    assert_eq!(finance.title, "Finance");
    let titles: Vec<&str> = finance.children.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Accounts Payable", "Accounts Receivable"]);
    assert_eq!(finance.children[0].children.len(), 2);
}

#[test]
fn rendered_tree_uses_guides() {
    let mut ctx = TestContext::new();
    let model = ctx.ingest_sample();
    let lines = format_tree(&run_impl(&ctx.store, &model.id).unwrap());

    assert_eq!(
        lines,
        vec![
            "[Epic] Finance (New)",
            "├── [Feature] Accounts Payable (Active)",
            "│   ├── [User Story] Invoice Entry (New)",
            "│   └── [Task] Invoice Approval (Closed)",
            "└── [Feature] Accounts Receivable (New)",
        ]
    );
}

#[test]
fn missing_model_is_an_error() {
    let ctx = TestContext::new();
    assert!(run_impl(&ctx.store, "nope").is_err());
}
