// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! procat-core: process-catalog ingestion engine
//!
//! Turns spreadsheet-encoded, multi-level process catalogs into flat lists of
//! hierarchical work items, and provides the operations used on them
//! afterwards: tree reconstruction, bulk edits, merging and CSV export.
//! Every operation that touches persisted models takes an explicit
//! [`ModelStore`] handle.

pub mod bulk;
pub mod classify;
pub mod db;
pub mod error;
pub mod export;
pub mod field;
pub mod hierarchy;
pub mod id;
pub mod ingest;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod reader;
pub mod sheet;
pub mod store;
pub mod tree;

#[cfg(test)]
mod test_helpers;

pub use bulk::{delete, replace, retype, DeleteOutcome, DeletedItem, ReplaceOutcome, RetypeOutcome};
pub use classify::{classify, ColumnLayout};
pub use db::Database;
pub use error::{Error, Result};
pub use export::{export_model, export_path, remove_model, write_csv};
pub use field::{field_names, field_values, FieldNames, FieldRef, TopLevelField};
pub use hierarchy::{AncestorChain, HierarchyBuilder, Placement};
pub use ingest::{extract_work_items, ingest_file, ingest_workbook, IngestOptions, UPLOAD_SOURCE};
pub use merge::merge_models;
pub use model::{ModelListing, ProcessModel, Summary, WorkItem};
pub use reader::read_workbook;
pub use sheet::{Cell, Sheet, Workbook};
pub use store::{MemoryStore, ModelStore};
pub use tree::{build_tree, Tree, TreeNode};
