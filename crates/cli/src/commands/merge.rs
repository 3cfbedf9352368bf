// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use procat_core::{merge_models, ModelStore, ProcessModel};

use crate::cli::OutputFormat;
use crate::display::format_summary;
use crate::error::Result;

use super::{open_db, print_json};

pub fn run(ids: &[String], name: &str, output: OutputFormat) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    let model = run_impl(&mut db, ids, name)?;
    match output {
        OutputFormat::Text => {
            println!(
                "Merged {} model(s) into {} ({})",
                ids.len(),
                model.id,
                model.filename
            );
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
    ids: &[String],
    name: &str,
) -> Result<ProcessModel> {
    Ok(merge_models(store, ids, name)?)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
