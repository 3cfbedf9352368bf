// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use procat_core::{remove_model, ModelStore};

use crate::config::get_exports_dir;
use crate::error::Result;

use super::open_db;

pub fn run(id: &str) -> Result<()> {
    let (mut db, config, work_dir) = open_db()?;
    run_impl(&mut db, &get_exports_dir(&work_dir, &config), id)?;
    println!("Removed {id}");
    Ok(())
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &mut dyn ModelStore, exports_dir: &Path, id: &str) -> Result<()> {
    Ok(remove_model(store, exports_dir, id)?)
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
