// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The persisted-model store interface.
//!
//! Every operation that reads or writes models takes an explicit store
//! handle. The store is read-modify-write with no isolation: callers must
//! serialize mutations of the same model id.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::{ModelListing, ProcessModel};

pub trait ModelStore {
    /// Fetch a model, or `None` if the id is unknown.
    fn get(&self, id: &str) -> Result<Option<ProcessModel>>;

    /// All models without their work items, newest first.
    fn list(&self) -> Result<Vec<ModelListing>>;

    /// Insert or replace a model under its id.
    fn save(&mut self, model: &ProcessModel) -> Result<()>;

    /// Remove a model. Returns whether it existed.
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Fetch a model that must exist.
    fn load(&self, id: &str) -> Result<ProcessModel> {
        self.get(id)?
            .ok_or_else(|| Error::ModelNotFound(id.to_string()))
    }
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    models: BTreeMap<String, ProcessModel>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<ProcessModel>> {
        Ok(self.models.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ModelListing>> {
        let mut listings: Vec<ModelListing> =
            self.models.values().map(ProcessModel::listing).collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    fn save(&mut self, model: &ProcessModel) -> Result<()> {
        self.models.insert(model.id.clone(), model.clone());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        Ok(self.models.remove(id).is_some())
    }

    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.models.contains_key(id))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
