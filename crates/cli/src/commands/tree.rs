// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use procat_core::{build_tree, ModelStore, Tree};

use crate::cli::OutputFormat;
use crate::display::format_tree;
use crate::error::Result;

use super::{open_db, print_json};

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let tree = run_impl(&db, id)?;
    match output {
        OutputFormat::Text => {
            for line in format_tree(&tree) {
                println!("{line}");
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&tree),
    }
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &dyn ModelStore, id: &str) -> Result<Tree> {
    let model = store.load(id)?;
    Ok(build_tree(&model.work_items))
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
