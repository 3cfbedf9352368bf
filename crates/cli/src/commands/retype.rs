// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use procat_core::{ModelStore, RetypeOutcome};

use crate::cli::OutputFormat;
use crate::display::format_retype;
use crate::error::{Error, Result};

use super::{open_db, print_json};

pub fn run(id: &str, mappings: &[String], output: OutputFormat) -> Result<()> {
    let mapping = parse_mappings(mappings)?;
    let (mut db, _, _) = open_db()?;
    let outcome = run_impl(&mut db, id, &mapping)?;
    match output {
        OutputFormat::Text => {
            println!("{}", format_retype(&outcome));
            Ok(())
        }
        OutputFormat::Json => print_json(&outcome),
    }
}

/// Parses `OLD=NEW` arguments. Later mappings for the same type win.
pub(crate) fn parse_mappings(args: &[String]) -> Result<BTreeMap<String, String>> {
    args.iter()
        .map(|arg| {
            let (old, new) = arg
                .split_once('=')
                .ok_or_else(|| Error::InvalidMapping(arg.clone()))?;
            let (old, new) = (old.trim(), new.trim());
            if old.is_empty() || new.is_empty() {
                return Err(Error::InvalidMapping(arg.clone()));
            }
            Ok((old.to_string(), new.to_string()))
        })
        .collect()
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(
    store: &mut dyn ModelStore,
    id: &str,
    mapping: &BTreeMap<String, String>,
) -> Result<RetypeOutcome> {
    Ok(procat_core::retype(store, id, mapping)?)
}

#[cfg(test)]
#[path = "retype_tests.rs"]
mod tests;
