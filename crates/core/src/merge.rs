// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Combining several stored models into a new one.
//!
//! Items are concatenated in argument order. Ids stay unique across the
//! result: an item whose id is empty or already taken gets a synthetic
//! `MERGED_NNNN` id and keeps the displaced one in `original_id`. Source
//! models are never modified.

use std::collections::HashSet;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::model::{ProcessModel, Summary, WorkItem, MERGED_SOURCE};
use crate::store::ModelStore;

/// Synthetic id for the `n`th reassigned item.
pub fn merged_id(n: usize) -> String {
    format!("MERGED_{n:04}")
}

/// Assigns unique ids across a merged item list.
#[derive(Debug, Default)]
pub struct IdAllocator {
    used: HashSet<String>,
    counter: usize,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the item's id when it is free, otherwise reassigns it.
    /// Returns whether the id changed.
    pub fn claim(&mut self, item: &mut WorkItem) -> bool {
        if !item.id.is_empty() && !self.used.contains(&item.id) {
            self.used.insert(item.id.clone());
            return false;
        }

        let id = loop {
            self.counter += 1;
            let candidate = merged_id(self.counter);
            if !self.used.contains(&candidate) {
                break candidate;
            }
        };
        self.used.insert(id.clone());
        let displaced = std::mem::replace(&mut item.id, id);
        if !displaced.is_empty() {
            item.original_id = Some(displaced);
        }
        true
    }
}

/// Merges `model_ids` into a new model named `name` and saves it.
pub fn merge_models(
    store: &mut dyn ModelStore,
    model_ids: &[String],
    name: &str,
) -> Result<ProcessModel> {
    if model_ids.len() < 2 {
        return Err(Error::TooFewModels {
            count: model_ids.len(),
        });
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::BlankMergeName);
    }

    let sources = model_ids
        .iter()
        .map(|id| store.load(id))
        .collect::<Result<Vec<_>>>()?;

    let mut allocator = IdAllocator::new();
    let mut work_items = Vec::new();
    let mut source_models = Vec::with_capacity(sources.len());
    let mut reassigned = 0;
    for source in sources {
        for mut item in source.work_items {
            item.source_model = Some(source.filename.clone());
            if allocator.claim(&mut item) {
                reassigned += 1;
            }
            work_items.push(item);
        }
        source_models.push(source.filename);
    }

    let created_at = Utc::now();
    let id = generate_unique_id(name, &created_at, |candidate| store.exists(candidate))?;
    let summary = Summary::for_merge(&work_items, source_models);
    let model = ProcessModel {
        id,
        filename: name.to_string(),
        created_at,
        source: MERGED_SOURCE.to_string(),
        work_items,
        summary,
    };
    store.save(&model)?;

    tracing::info!(
        model = %model.id,
        sources = model_ids.len(),
        items = model.work_items.len(),
        reassigned,
        "merged models"
    );
    Ok(model)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
