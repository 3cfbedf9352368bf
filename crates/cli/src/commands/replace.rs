// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use procat_core::{ModelStore, ReplaceOutcome};

use crate::cli::OutputFormat;
use crate::display::format_replace;
use crate::error::Result;

use super::{open_db, print_json};

pub fn run(id: &str, field: &str, old: &str, new: &str, output: OutputFormat) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    let outcome = run_impl(&mut db, id, field, old, new)?;
    match output {
        OutputFormat::Text => {
            println!("{}", format_replace(&outcome));
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
    old: &str,
    new: &str,
) -> Result<ReplaceOutcome> {
    Ok(procat_core::replace(store, id, field, old, new)?)
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
