// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use procat_core::{ModelStore, ProcessModel};

use crate::cli::OutputFormat;
use crate::display::format_model_details;
use crate::error::Result;

use super::{open_db, print_json};

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let model = run_impl(&db, id)?;
    match output {
        OutputFormat::Text => {
            println!("{}", format_model_details(&model));
            Ok(())
        }
        OutputFormat::Json => print_json(&model),
    }
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &dyn ModelStore, id: &str) -> Result<ProcessModel> {
    Ok(store.load(id)?)
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
