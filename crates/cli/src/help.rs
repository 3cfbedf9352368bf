// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level help layout.

use clap::builder::styling::Styles;

use crate::colors;

/// Clap styles matching [`colors::codes`].
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

const CATALOG_COMMANDS: &[(&str, &str)] = &[
    ("ingest", "Ingest a spreadsheet as a new model"),
    ("list", "List stored models"),
    ("show", "Show a model and its work items"),
    ("tree", "Show the reconstructed hierarchy"),
    ("fields", "List field names or values"),
];

const EDIT_COMMANDS: &[(&str, &str)] = &[
    ("replace", "Replace a field value across items"),
    ("delete", "Delete items matching a field value"),
    ("retype", "Rename work item types"),
    ("merge", "Merge models into a new one"),
];

const SETUP_COMMANDS: &[(&str, &str)] = &[
    ("init", "Initialize a project"),
    ("export", "Export a model to CSV"),
    ("remove", "Remove a model and its export"),
    ("completion", "Generate shell completions"),
];

fn section(title: &str, entries: &[(&str, &str)]) -> String {
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = colors::header(title);
    for (name, about) in entries {
        let pad = " ".repeat(width - name.len() + 2);
        out.push_str(&format!("\n  {}{pad}{about}", colors::literal(name)));
    }
    out
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    [
        section("Catalog:", CATALOG_COMMANDS),
        section("Editing:", EDIT_COMMANDS),
        section("Setup:", SETUP_COMMANDS),
    ]
    .join("\n\n")
}

/// Quickstart shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  procat init                     Initialize a project
  procat ingest catalog.xlsx      Ingest a workbook
  procat list                     List models
  procat tree <id>                Show the hierarchy
  procat export <id>              Write a CSV export",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
