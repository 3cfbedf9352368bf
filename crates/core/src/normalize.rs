// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work item normalization.
//!
//! Turns one placed row into a canonical [`WorkItem`]: type and state
//! inference, full custom-field capture, and deterministic id and tags.

use std::collections::BTreeMap;

use crate::classify::ColumnLayout;
use crate::hierarchy::Placement;
use crate::model::{WorkItem, DEFAULT_PRIORITY, DEFAULT_STATE};
use crate::sheet::{Cell, Sheet};

/// Type that triggers hierarchy-level inference when it is the resolved type.
pub const DEFAULT_TYPE: &str = "User Story";

/// Source type names and the tracker type each maps to.
pub const TYPE_ALIASES: &[(&str, &str)] = &[
    ("Epic", "Epic"),
    ("Feature", "Feature"),
    ("User Story", "User Story"),
    ("Story", "User Story"),
    ("Task", "Task"),
    ("Bug", "Bug"),
    ("Issue", "Bug"),
    ("Business Process", "Epic"),
    ("Process Step", "Feature"),
    ("Activity", "User Story"),
    ("Sub-Activity", "Task"),
];

/// Column-name keywords whose values are promoted to the description.
pub const DESCRIPTION_KEYWORDS: &[&str] = &["description", "detail", "summary", "note"];

pub const CATALOG_STATUS_COLUMN: &str = "Catalog Status";
pub const PROCESS_SEQUENCE_COLUMN: &str = "Process sequence ID";

/// Leading tag on every ingested item.
pub const IMPORT_TAG: &str = "fasttrack-import";

/// Maps a source type through [`TYPE_ALIASES`]; unknown values pass through.
pub fn map_type(raw: &str) -> String {
    TYPE_ALIASES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Type implied by hierarchy depth alone.
pub fn type_for_level(level: usize) -> &'static str {
    match level {
        0 | 1 => "Epic",
        2 => "Feature",
        3 => "User Story",
        _ => "Task",
    }
}

/// Resolves the work item type.
///
/// An explicit value is mapped first. When there is none, or the mapped value
/// is exactly [`DEFAULT_TYPE`], the level decides. So an explicit
/// `User Story` on a level-1 row becomes `Epic`.
pub fn infer_type(explicit: Option<&str>, level: usize) -> String {
    let mapped = explicit.map(map_type);
    match mapped {
        Some(t) if t != DEFAULT_TYPE => t,
        _ => type_for_level(level).to_string(),
    }
}

/// Sheet name as it appears in tags: lowercased, spaces become `-`.
pub fn slug(sheet_name: &str) -> String {
    sheet_name.to_lowercase().replace(' ', "-")
}

/// Deterministic work item id.
pub fn work_item_id(model_id: &str, sheet_name: &str, row_index: usize) -> String {
    format!("{model_id}_{sheet_name}_{row_index}")
}

/// Deterministic tag string.
pub fn work_item_tags(sheet_name: &str, row_index: usize) -> String {
    format!("{IMPORT_TAG};{};row-{row_index}", slug(sheet_name))
}

/// Builds work items for the rows of one sheet.
#[derive(Debug)]
pub struct Normalizer<'a> {
    sheet: &'a Sheet,
    layout: &'a ColumnLayout,
    model_id: &'a str,
    catalog_status: Option<usize>,
    process_sequence: Option<usize>,
}

impl<'a> Normalizer<'a> {
    pub fn new(sheet: &'a Sheet, layout: &'a ColumnLayout, model_id: &'a str) -> Self {
        Normalizer {
            sheet,
            layout,
            model_id,
            catalog_status: sheet.column_index(CATALOG_STATUS_COLUMN),
            process_sequence: sheet.column_index(PROCESS_SEQUENCE_COLUMN),
        }
    }

    /// Builds the work item for `row` (at `row_index`) placed at `placement`.
    pub fn work_item(&self, row_index: usize, row: &[Cell], placement: Placement) -> WorkItem {
        let cell = |col: usize| row.get(col).and_then(Cell::text);

        let explicit_type = self.layout.type_columns.iter().find_map(|&c| cell(c));
        let work_item_type = infer_type(explicit_type.as_deref(), placement.level);

        let state = self
            .layout
            .state_column
            .and_then(cell)
            .unwrap_or_else(|| DEFAULT_STATE.to_string());

        let mut custom_fields = BTreeMap::new();
        let mut description = String::new();
        for (col, name) in self.sheet.columns.iter().enumerate() {
            let Some(value) = cell(col) else {
                continue;
            };
            let key = name.trim();
            if description.is_empty() {
                let lower = key.to_lowercase();
                if DESCRIPTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
                    description = value.clone();
                }
            }
            custom_fields.insert(key.to_string(), value);
        }

        let sheet_name = self.sheet.name.as_str();
        let mut item = WorkItem {
            id: work_item_id(self.model_id, sheet_name, row_index),
            title: placement.title,
            description,
            work_item_type,
            state,
            area_path: String::new(),
            iteration_path: String::new(),
            priority: DEFAULT_PRIORITY,
            tags: work_item_tags(sheet_name, row_index),
            source_sheet: sheet_name.to_string(),
            source_row: row_index,
            hierarchy_level: placement.level,
            catalog_status: self.catalog_status.and_then(cell),
            process_sequence_id: self.process_sequence.and_then(cell),
            source_model: None,
            original_id: None,
            custom_fields,
        };
        // Overrides any literal "Area Path" column.
        item.set_area_path(placement.area_path);
        item
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
