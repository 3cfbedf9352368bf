// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use procat_core::{ingest_file, IngestOptions, ModelStore, ProcessModel};

use crate::cli::OutputFormat;
use crate::display::format_summary;
use crate::error::Result;

use super::{open_db, print_json};

pub fn run(file: &str, source: &str, output: OutputFormat) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let model = run_impl(&mut db, Path::new(file), source, &config.ingest_options())?;
    match output {
        OutputFormat::Text => {
            println!("Ingested {} as {}", model.filename, model.id);
            for line in format_summary(&model.summary) {
                println!("  {line}");
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&model),
    }
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(
    store: &mut dyn ModelStore,
    file: &Path,
    source: &str,
    options: &IngestOptions,
) -> Result<ProcessModel> {
    Ok(ingest_file(store, file, source, options)?)
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
