// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use procat_core::{ModelListing, ModelStore};

use crate::cli::OutputFormat;
use crate::display::format_listing_line;
use crate::error::Result;

use super::{open_db, print_json};

pub fn run(output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let listings = run_impl(&db)?;
    match output {
        OutputFormat::Text => {
            if listings.is_empty() {
                println!("No models. Ingest one with 'procat ingest <file>'.");
            }
            for listing in &listings {
                println!("{}", format_listing_line(listing));
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&listings),
    }
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &dyn ModelStore) -> Result<Vec<ModelListing>> {
    Ok(store.list()?)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
