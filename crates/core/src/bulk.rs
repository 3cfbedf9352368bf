// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk field edits over a stored model.
//!
//! Field names resolve per item through [`WorkItem::field_ref`], so a name
//! that exists both as a top-level attribute and as a custom field always
//! means the attribute. Values compare as strings. A model is written back
//! only when something changed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::field::TopLevelField;
use crate::model::{Summary, WorkItem};
use crate::store::ModelStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaceOutcome {
    pub model_id: String,
    pub field_name: String,
    pub old_value: String,
    pub new_value: String,
    pub replacement_count: usize,
    pub summary: Summary,
}

/// Id and title of a deleted item, kept for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedItem {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub model_id: String,
    pub field_name: String,
    pub field_value: String,
    pub deletion_count: usize,
    pub original_count: usize,
    pub remaining_count: usize,
    pub deleted_items: Vec<DeletedItem>,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetypeOutcome {
    pub model_id: String,
    pub updated_count: usize,
    pub summary: Summary,
}

fn matches(item: &WorkItem, field: &str, value: &str) -> bool {
    item.field_value(field).as_deref() == Some(value)
}

/// Sets `field` to `new` on every item whose value is exactly `old`.
///
/// A top-level `field` is validated against `new` before the model is
/// loaded. Replacing a value with itself changes nothing and counts zero.
pub fn replace(
    store: &mut dyn ModelStore,
    model_id: &str,
    field: &str,
    old: &str,
    new: &str,
) -> Result<ReplaceOutcome> {
    if let Ok(top) = field.parse::<TopLevelField>() {
        top.validate(new)?;
    }

    let mut model = store.load(model_id)?;
    let mut replacement_count = 0;
    if old != new {
        for item in &mut model.work_items {
            let Some(slot) = item.field_ref(field) else {
                continue;
            };
            if slot.get(item).as_deref() == Some(old) {
                slot.set(item, new)?;
                replacement_count += 1;
            }
        }
    }

    if replacement_count > 0 {
        model.summary.refresh(&model.work_items);
        store.save(&model)?;
    }

    tracing::info!(
        model = model_id,
        field,
        old,
        new,
        count = replacement_count,
        "replaced field values"
    );

    Ok(ReplaceOutcome {
        model_id: model.id,
        field_name: field.to_string(),
        old_value: old.to_string(),
        new_value: new.to_string(),
        replacement_count,
        summary: model.summary,
    })
}

/// Removes every item whose `field` equals `value`.
pub fn delete(
    store: &mut dyn ModelStore,
    model_id: &str,
    field: &str,
    value: &str,
) -> Result<DeleteOutcome> {
    let mut model = store.load(model_id)?;
    let original_count = model.work_items.len();

    let (removed, kept): (Vec<WorkItem>, Vec<WorkItem>) = model
        .work_items
        .into_iter()
        .partition(|item| matches(item, field, value));
    model.work_items = kept;

    if !removed.is_empty() {
        model.summary.refresh(&model.work_items);
        store.save(&model)?;
    }

    tracing::info!(
        model = model_id,
        field,
        value,
        count = removed.len(),
        "deleted work items"
    );

    Ok(DeleteOutcome {
        model_id: model.id,
        field_name: field.to_string(),
        field_value: value.to_string(),
        deletion_count: removed.len(),
        original_count,
        remaining_count: model.work_items.len(),
        deleted_items: removed
            .into_iter()
            .map(|item| DeletedItem {
                id: item.id,
                title: item.title,
            })
            .collect(),
        summary: model.summary,
    })
}

/// Renames work item types in one pass using an old → new mapping.
///
/// Each item is looked up once, so chained mappings (`A=B`, `B=C`) do not
/// cascade.
pub fn retype(
    store: &mut dyn ModelStore,
    model_id: &str,
    mapping: &BTreeMap<String, String>,
) -> Result<RetypeOutcome> {
    let mut model = store.load(model_id)?;

    let mut updated_count = 0;
    for item in &mut model.work_items {
        if let Some(new_type) = mapping.get(&item.work_item_type) {
            if *new_type != item.work_item_type {
                item.work_item_type = new_type.clone();
                updated_count += 1;
            }
        }
    }

    if updated_count > 0 {
        model.summary.refresh(&model.work_items);
        store.save(&model)?;
    }

    tracing::info!(model = model_id, count = updated_count, "retyped work items");

    Ok(RetypeOutcome {
        model_id: model.id,
        updated_count,
        summary: model.summary,
    })
}

#[cfg(test)]
#[path = "bulk_tests.rs"]
mod tests;
