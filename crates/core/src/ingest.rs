// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spreadsheet ingestion: workbook in, persisted [`ProcessModel`] out.
//!
//! Per sheet the pipeline is clean → classify → place each row in the
//! hierarchy → normalize. Rows without a usable title are skipped and do not
//! count anywhere. Nothing is saved unless every sheet converts.

use std::path::Path;

use chrono::Utc;

use crate::classify::{classify, DEFAULT_MAX_TITLE_LEVELS};
use crate::error::{Error, Result};
use crate::hierarchy::HierarchyBuilder;
use crate::id::generate_unique_id;
use crate::model::{ProcessModel, Summary, WorkItem};
use crate::normalize::Normalizer;
use crate::reader::read_workbook;
use crate::sheet::{Sheet, Workbook};
use crate::store::ModelStore;

/// Source tag for models ingested from a local file.
pub const UPLOAD_SOURCE: &str = "upload";

/// Tunables for ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Highest `Title N` level recognized.
    pub max_title_levels: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        IngestOptions {
            max_title_levels: DEFAULT_MAX_TITLE_LEVELS,
        }
    }
}

/// Converts one raw sheet into work items.
pub fn extract_work_items(sheet: &Sheet, model_id: &str, options: &IngestOptions) -> Vec<WorkItem> {
    convert_sheet(&sheet.clean(), model_id, options)
}

fn convert_sheet(sheet: &Sheet, model_id: &str, options: &IngestOptions) -> Vec<WorkItem> {
    let layout = classify(sheet, options.max_title_levels);
    let mut builder = HierarchyBuilder::new(&layout);
    let normalizer = Normalizer::new(sheet, &layout, model_id);

    let mut items = Vec::with_capacity(sheet.rows.len());
    for (row_index, row) in sheet.rows.iter().enumerate() {
        match builder.place(row) {
            Some(placement) => items.push(normalizer.work_item(row_index, row, placement)),
            None => tracing::debug!(sheet = %sheet.name, row = row_index, "skipping row without title"),
        }
    }

    tracing::debug!(
        sheet = %sheet.name,
        depth = layout.depth(),
        items = items.len(),
        "converted sheet"
    );
    items
}

/// Ingests an in-memory workbook and saves the resulting model.
pub fn ingest_workbook(
    store: &mut dyn ModelStore,
    workbook: &Workbook,
    filename: &str,
    source: &str,
    options: &IngestOptions,
) -> Result<ProcessModel> {
    if workbook.sheets.is_empty() {
        return Err(Error::NoSheets(filename.to_string()));
    }

    let created_at = Utc::now();
    let id = generate_unique_id(filename, &created_at, |candidate| store.exists(candidate))?;
    tracing::info!(model = %id, filename, sheets = workbook.sheets.len(), "ingesting workbook");

    let mut work_items = Vec::new();
    let mut process_areas = Vec::new();
    for sheet in &workbook.sheets {
        let sheet = sheet.clean();
        if sheet.is_empty() {
            tracing::debug!(sheet = %sheet.name, "skipping empty sheet");
            continue;
        }
        work_items.extend(convert_sheet(&sheet, &id, options));
        process_areas.push(sheet.name);
    }

    let summary = Summary::for_ingest(&work_items, workbook.sheets.len(), process_areas);
    let model = ProcessModel {
        id,
        filename: filename.to_string(),
        created_at,
        source: source.to_string(),
        work_items,
        summary,
    };
    store.save(&model)?;

    tracing::info!(model = %model.id, items = model.work_items.len(), "ingested workbook");
    Ok(model)
}

/// Reads a spreadsheet file and ingests it.
pub fn ingest_file(
    store: &mut dyn ModelStore,
    path: &Path,
    source: &str,
    options: &IngestOptions,
) -> Result<ProcessModel> {
    let workbook = read_workbook(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    ingest_workbook(store, &workbook, &filename, source, options)
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
