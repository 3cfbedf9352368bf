// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use procat_core::{DeleteOutcome, ModelStore};

use crate::cli::OutputFormat;
use crate::display::format_delete;
use crate::error::Result;

use super::{open_db, print_json};

pub fn run(id: &str, field: &str, value: &str, output: OutputFormat) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    let outcome = run_impl(&mut db, id, field, value)?;
    match output {
        OutputFormat::Text => {
            println!("{}", format_delete(&outcome));
            Ok(())
        }
        OutputFormat::Json => print_json(&outcome),
    }
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(
    store: &mut dyn ModelStore,
    id: &str,
    field: &str,
    value: &str,
) -> Result<DeleteOutcome> {
    Ok(procat_core::delete(store, id, field, value)?)
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
