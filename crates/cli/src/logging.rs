// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG`, then `PROCAT_LOG`, then the project's
//! `log_level`. Inside a project, events are appended to `.procat/procat.log`;
//! elsewhere they go to stderr.

use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::{find_work_dir, get_log_path, Config, DEFAULT_LOG_LEVEL};
use crate::env;
use crate::error::{Error, Result};

/// Picks the filter directive by precedence.
pub fn filter_directive(
    rust_log: Option<String>,
    procat_log: Option<String>,
    config_level: &str,
) -> String {
    rust_log
        .or(procat_log)
        .unwrap_or_else(|| config_level.to_string())
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber for the current project, if any.
pub fn init() -> Result<()> {
    let work_dir = find_work_dir().ok();
    let config_level = work_dir
        .as_deref()
        .and_then(|dir| Config::load(dir).ok())
        .map(|config| config.log_level().to_string())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let directive = filter_directive(env::rust_log(), env::procat_log(), &config_level);
    install(&directive, work_dir.as_deref())
}

fn install(directive: &str, work_dir: Option<&Path>) -> Result<()> {
    let filter = build_filter(directive);

    let log_file = work_dir.and_then(|dir| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(get_log_path(dir))
            .ok()
    });

    let result = match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
