// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use procat_core::{field_names, field_values, FieldNames, ModelStore};

use crate::cli::OutputFormat;
use crate::display::format_field_names;
use crate::error::Result;

use super::{open_db, print_json};

/// Either the field catalog or the distinct values of one field.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum FieldListing {
    Names(FieldNames),
    Values { field: String, values: Vec<String> },
}

pub fn run(id: &str, field: Option<&str>, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let listing = run_impl(&db, id, field)?;
    match output {
        OutputFormat::Json => print_json(&listing),
        OutputFormat::Text => {
            match listing {
                FieldListing::Names(names) => println!("{}", format_field_names(&names)),
                FieldListing::Values { values, .. } => {
                    for value in values {
                        println!("{value}");
                    }
                }
            }
            Ok(())
        }
    }
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(
    store: &dyn ModelStore,
    id: &str,
    field: Option<&str>,
) -> Result<FieldListing> {
    let model = store.load(id)?;
    Ok(match field {
        None => FieldListing::Names(field_names(&model)),
        Some(name) => FieldListing::Values {
            field: name.to_string(),
            values: field_values(&model, name),
        },
    })
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
