// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV export in the issue tracker's bulk-import layout.

use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::ProcessModel;
use crate::store::ModelStore;

/// Fixed leading columns of every export.
pub const EXPORT_COLUMNS: [&str; 8] = [
    "Title",
    "Work Item Type",
    "Description",
    "Area Path",
    "Iteration Path",
    "Priority",
    "State",
    "Tags",
];

/// Prefix for custom-field columns.
pub const CUSTOM_PREFIX: &str = "Custom.";

/// Custom-field keys in order of first appearance across the items.
pub fn custom_columns(model: &ProcessModel) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for key in model.work_items.iter().flat_map(|i| i.custom_fields.keys()) {
        if seen.insert(key.as_str()) {
            columns.push(key.clone());
        }
    }
    columns
}

/// Writes the model as CSV: one row per work item.
pub fn write_csv<W: Write>(model: &ProcessModel, writer: W) -> Result<()> {
    let custom = custom_columns(model);
    let mut csv = csv::Writer::from_writer(writer);

    let header = EXPORT_COLUMNS
        .iter()
        .map(|c| (*c).to_string())
        .chain(custom.iter().map(|k| format!("{CUSTOM_PREFIX}{k}")));
    csv.write_record(header)?;

    for item in &model.work_items {
        let fixed = [
            item.title.clone(),
            item.work_item_type.clone(),
            item.description.clone(),
            item.area_path.clone(),
            item.iteration_path.clone(),
            item.priority.to_string(),
            item.state.clone(),
            item.tags.clone(),
        ];
        let extra = custom
            .iter()
            .map(|k| item.custom_fields.get(k).cloned().unwrap_or_default());
        csv.write_record(fixed.into_iter().chain(extra))?;
    }

    csv.flush()?;
    Ok(())
}

/// Where the export of `model_id` lives.
pub fn export_path(exports_dir: &Path, model_id: &str) -> PathBuf {
    exports_dir.join(format!("{model_id}_export.csv"))
}

/// Writes the export file for a stored model and returns its path.
pub fn export_model(store: &dyn ModelStore, exports_dir: &Path, model_id: &str) -> Result<PathBuf> {
    let model = store.load(model_id)?;
    std::fs::create_dir_all(exports_dir)?;

    let path = export_path(exports_dir, model_id);
    write_csv(&model, File::create(&path)?)?;

    tracing::info!(model = model_id, path = %path.display(), "exported model");
    Ok(path)
}

/// Deletes a model and its export file, if one was written.
pub fn remove_model(store: &mut dyn ModelStore, exports_dir: &Path, model_id: &str) -> Result<()> {
    if !store.delete(model_id)? {
        return Err(Error::ModelNotFound(model_id.to_string()));
    }

    let path = export_path(exports_dir, model_id);
    match std::fs::remove_file(&path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    tracing::info!(model = model_id, "removed model");
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
