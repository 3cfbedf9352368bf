// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::{Path, PathBuf};

use procat_core::Database;

use crate::config::{get_db_path, get_exports_dir, init_work_dir, Config};
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path)?;
    println!("Initialized process catalog at {}", work_dir.display());
    Ok(())
}

/// Creates `.procat/` under `target_path` with its database and exports directory.
pub(crate) fn run_impl(target_path: &Path) -> Result<PathBuf> {
    let work_dir = init_work_dir(target_path)?;
    let config = Config::load(&work_dir)?;

    Database::open(&get_db_path(&work_dir, &config))?;
    fs::create_dir_all(get_exports_dir(&work_dir, &config))?;

    tracing::info!(path = %work_dir.display(), "initialized project");
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
