// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use procat_core::{export_model, write_csv, ModelStore};

use crate::config::get_exports_dir;
use crate::error::Result;

use super::open_db;

/// Where the CSV goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    /// `{exports}/{id}_export.csv`
    ExportsDir(PathBuf),
    File(PathBuf),
    Stdout,
}

impl Target {
    pub(crate) fn from_arg(out: Option<&str>, exports_dir: PathBuf) -> Self {
        match out {
            None => Target::ExportsDir(exports_dir),
            Some("-") => Target::Stdout,
            Some(path) => Target::File(PathBuf::from(path)),
        }
    }
}

pub fn run(id: &str, out: Option<&str>) -> Result<()> {
    let (db, config, work_dir) = open_db()?;
    let target = Target::from_arg(out, get_exports_dir(&work_dir, &config));
    if let Some(path) = run_impl(&db, id, &target)? {
        println!("Exported {} to {}", id, path.display());
    }
    Ok(())
}

/// Internal implementation that accepts the store for testing.
///
/// Returns the written path, or `None` when writing to stdout.
pub(crate) fn run_impl(store: &dyn ModelStore, id: &str, target: &Target) -> Result<Option<PathBuf>> {
    match target {
        Target::ExportsDir(dir) => Ok(Some(export_model(store, dir, id)?)),
        Target::File(path) => {
            write_to(store, id, path)?;
            Ok(Some(path.clone()))
        }
        Target::Stdout => {
            let model = store.load(id)?;
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_csv(&model, &mut handle)?;
            handle.flush()?;
            Ok(None)
        }
    }
}

fn write_to(store: &dyn ModelStore, id: &str, path: &Path) -> Result<()> {
    let model = store.load(id)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&model, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
