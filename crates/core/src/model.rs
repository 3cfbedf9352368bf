// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core record types: [`ProcessModel`], [`WorkItem`] and [`Summary`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Custom-field key that always mirrors a work item's computed area path.
pub const AREA_PATH_FIELD: &str = "Area Path";

/// Default state for items without an explicit `State` value.
pub const DEFAULT_STATE: &str = "New";

/// Default priority assigned at ingest.
pub const DEFAULT_PRIORITY: u32 = 2;

/// Source tag of models produced by merging.
pub const MERGED_SOURCE: &str = "merged";

/// A normalized unit of process-catalog content destined for an issue tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique within its model.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub work_item_type: String,
    pub state: String,
    /// Backslash-delimited chain of ancestor titles.
    pub area_path: String,
    #[serde(default)]
    pub iteration_path: String,
    pub priority: u32,
    pub tags: String,
    pub source_sheet: String,
    pub source_row: usize,
    /// 1-based depth inferred from the populated title column.
    pub hierarchy_level: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_sequence_id: Option<String>,
    /// Display name of the model this item came from (merged models only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_model: Option<String>,
    /// Id the item carried before a merge reassigned it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    /// Raw column name to trimmed cell value, for every non-empty cell.
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

impl WorkItem {
    /// Sets the area path and mirrors it into `custom_fields["Area Path"]`.
    pub fn set_area_path(&mut self, area_path: impl Into<String>) {
        let area_path = area_path.into();
        self.custom_fields
            .insert(AREA_PATH_FIELD.to_string(), area_path.clone());
        self.area_path = area_path;
    }

    /// The area path with its last segment removed, or `""` for a root path.
    pub fn parent_path(&self) -> &str {
        self.area_path
            .rsplit_once('\\')
            .map(|(parent, _)| parent)
            .unwrap_or("")
    }
}

/// Aggregate counts over a model's work items. Always recomputed, never edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_rows: usize,
    pub total_sheets: usize,
    pub work_item_types: Vec<String>,
    /// Names of the non-empty sheets an ingest drew from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub process_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub area_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub iterations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_models: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_model_count: Option<usize>,
}

impl Summary {
    /// Summary for a freshly ingested model.
    pub fn for_ingest(items: &[WorkItem], total_sheets: usize, process_areas: Vec<String>) -> Self {
        Summary {
            total_rows: items.len(),
            total_sheets,
            work_item_types: distinct_types(items),
            process_areas,
            ..Summary::default()
        }
    }

    /// Summary for a model produced by merging `source_models`.
    pub fn for_merge(items: &[WorkItem], source_models: Vec<String>) -> Self {
        let sheets: BTreeSet<&str> = items.iter().map(|i| i.source_sheet.as_str()).collect();
        let area_paths: BTreeSet<String> = items.iter().map(|i| i.area_path.clone()).collect();
        let iterations: BTreeSet<String> = items
            .iter()
            .filter(|i| !i.iteration_path.is_empty())
            .map(|i| i.iteration_path.clone())
            .collect();
        Summary {
            total_rows: items.len(),
            total_sheets: sheets.len(),
            work_item_types: distinct_types(items),
            process_areas: Vec::new(),
            area_paths: area_paths.into_iter().collect(),
            iterations: iterations.into_iter().collect(),
            source_model_count: Some(source_models.len()),
            source_models,
        }
    }

    /// Recomputes the fields that depend on the work item set after a
    /// mutation. Merged models also rebuild their sheet, area path and
    /// iteration aggregates; the source model list is kept.
    pub fn refresh(&mut self, items: &[WorkItem]) {
        if self.source_model_count.is_some() {
            let source_models = std::mem::take(&mut self.source_models);
            *self = Summary::for_merge(items, source_models);
            return;
        }
        self.total_rows = items.len();
        self.work_item_types = distinct_types(items);
    }
}

/// Sorted distinct work item types.
pub fn distinct_types(items: &[WorkItem]) -> Vec<String> {
    let types: BTreeSet<&str> = items.iter().map(|i| i.work_item_type.as_str()).collect();
    types.into_iter().map(String::from).collect()
}

/// A persisted, ordered collection of work items from one ingest or merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessModel {
    pub id: String,
    /// Display name: the source file name, or the merge name.
    pub filename: String,
    pub created_at: DateTime<Utc>,
    /// Where the model came from: `upload`, `github`, `merged`, ...
    pub source: String,
    pub work_items: Vec<WorkItem>,
    pub summary: Summary,
}

impl ProcessModel {
    /// Lightweight listing of this model without its work items.
    pub fn listing(&self) -> ModelListing {
        ModelListing {
            id: self.id.clone(),
            filename: self.filename.clone(),
            created_at: self.created_at,
            source: self.source.clone(),
            summary: self.summary.clone(),
        }
    }
}

/// A model as returned by [`crate::store::ModelStore::list`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelListing {
    pub id: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub source: String,
    pub summary: Summary,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
