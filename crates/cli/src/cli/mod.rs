// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::colors;
use crate::help;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "procat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Ingest process-catalog spreadsheets into hierarchical work items")]
#[command(
    long_about = "Ingest process-catalog spreadsheets into hierarchical work items.\n\n\
    Models are stored in a project-local database and can be browsed as a tree, \
    edited in bulk, merged and exported to CSV."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if procat was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a project in the current directory
    #[command(after_help = colors::examples("\
Examples:
  procat init                   Initialize in the current directory
  procat init --path ../books   Initialize in another directory"))]
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Ingest a spreadsheet (.xlsx, .xls, .ods or .csv) as a new model
    #[command(after_help = colors::examples("\
Examples:
  procat ingest catalog.xlsx            Ingest a workbook
  procat ingest ops.csv -o json         Ingest and print the model as JSON
  procat ingest ops.xlsx --source api   Record a different source tag"))]
    Ingest {
        /// Spreadsheet file
        file: String,

        /// Source tag stored on the model
        #[arg(long, default_value = procat_core::UPLOAD_SOURCE, value_parser = non_empty_string)]
        source: String,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List stored models, newest first
    List {
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a model with its summary and work items
    Show {
        id: String,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the reconstructed hierarchy of a model
    #[command(after_help = colors::examples("\
Examples:
  procat tree <id>           Print the hierarchy with guides
  procat tree <id> -o json   Print the nested tree as JSON"))]
    Tree {
        id: String,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List field names, or the distinct values of one field
    #[command(after_help = colors::examples("\
Examples:
  procat fields <id>            List top-level and custom fields
  procat fields <id> state      List distinct values of state"))]
    Fields {
        id: String,

        /// Field to list values for
        field: Option<String>,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Replace a field value on every matching work item
    #[command(after_help = colors::examples("\
Examples:
  procat replace <id> state New Active         Rename a state
  procat replace <id> \"Owner\" \"Ann\" \"Bob\"      Edit a custom field"))]
    Replace {
        id: String,

        #[arg(value_parser = non_empty_string)]
        field: String,

        /// Value to match exactly
        old: String,

        /// Replacement value
        new: String,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete work items whose field equals a value
    #[command(after_help = colors::examples("\
Examples:
  procat delete <id> state Closed         Drop closed items
  procat delete <id> type Task -o json    Drop tasks, print the audit as JSON"))]
    Delete {
        id: String,

        #[arg(value_parser = non_empty_string)]
        field: String,

        value: String,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Rename work item types
    #[command(after_help = colors::examples("\
Examples:
  procat retype <id> Task=Subtask                Rename one type
  procat retype <id> Epic=Feature Feature=Epic   Swap two types"))]
    Retype {
        id: String,

        /// Mappings in OLD=NEW form
        #[arg(required = true, value_name = "OLD=NEW")]
        mappings: Vec<String>,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Merge two or more models into a new one
    #[command(after_help = colors::examples("\
Examples:
  procat merge <id> <id> --name \"FY26 catalog\"   Merge two models"))]
    Merge {
        /// Models to merge, in order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Name of the merged model
        #[arg(long)]
        name: String,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Export a model to CSV
    #[command(after_help = colors::examples("\
Examples:
  procat export <id>                Write to the project exports directory
  procat export <id> --out a.csv    Write to a specific file
  procat export <id> --out -        Write to stdout"))]
    Export {
        id: String,

        /// Output file, or `-` for stdout
        #[arg(long)]
        out: Option<String>,
    },

    /// Remove a model and its export file
    Remove { id: String },

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
