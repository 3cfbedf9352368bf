// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! procatrs - command-line front end for the process-catalog engine.
//!
//! Commands locate the nearest `.procat/` project, open its SQLite model
//! store and call into [`procat_core`].
//!
//! ```rust,ignore
//! use procatrs::{find_work_dir, get_db_path, Config};
//! use procat_core::Database;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, get_db_path, get_exports_dir, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::Ingest {
            file,
            source,
            output,
        } => commands::ingest::run(&file, &source, output),
        Command::List { output } => commands::list::run(output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Tree { id, output } => commands::tree::run(&id, output),
        Command::Fields { id, field, output } => {
            commands::fields::run(&id, field.as_deref(), output)
        }
        Command::Replace {
            id,
            field,
            old,
            new,
            output,
        } => commands::replace::run(&id, &field, &old, &new, output),
        Command::Delete {
            id,
            field,
            value,
            output,
        } => commands::delete::run(&id, &field, &value, output),
        Command::Retype {
            id,
            mappings,
            output,
        } => commands::retype::run(&id, &mappings, output),
        Command::Merge { ids, name, output } => commands::merge::run(&ids, &name, output),
        Command::Export { id, out } => commands::export::run(&id, out.as_deref()),
        Command::Remove { id } => commands::remove::run(&id),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "procat", &mut std::io::stdout());
            Ok(())
        }
    }
}
