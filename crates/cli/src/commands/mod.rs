// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod delete;
pub mod export;
pub mod fields;
pub mod ingest;
pub mod init;
pub mod list;
pub mod merge;
pub mod remove;
pub mod replace;
pub mod retype;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod tree;

use std::path::PathBuf;

use serde::Serialize;

use procat_core::Database;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;

/// Helper to open the model database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening model database");
    let db = Database::open(&db_path)?;
    Ok((db, config, work_dir))
}

/// Prints `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
