// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Column classification.
//!
//! Finds the columns that carry structure in a cleaned sheet: the positional
//! `Title 1`..`Title N` outline columns, the work item type column(s), the
//! `State` column, and fallback title columns for sheets without an outline.
//! Classification never fails; a sheet with none of these is still valid.

use crate::sheet::Sheet;

/// Recognized names for the work item type column, in priority order.
pub const TYPE_COLUMN_ALIASES: &[&str] = &["Work Item Type", "Type", "Item Type", "WorkItemType"];

/// Name of the state column.
pub const STATE_COLUMN: &str = "State";

/// Column-name keywords that mark a usable fallback title.
pub const TITLE_KEYWORDS: &[&str] = &["title", "name", "process", "activity", "description"];

/// Default number of positional title columns recognized.
pub const DEFAULT_MAX_TITLE_LEVELS: usize = 5;

/// Upper bound accepted for the configured title depth.
pub const MAX_TITLE_LEVELS: usize = 100;

/// The structural columns of one sheet, by column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Positional title columns, shallowest first. Position + 1 is the level.
    pub title_levels: Vec<usize>,
    /// Type columns present, in alias priority order.
    pub type_columns: Vec<usize>,
    pub state_column: Option<usize>,
    /// Columns tried, in order, when a row has no positional title.
    pub fallback_titles: Vec<usize>,
}

impl ColumnLayout {
    /// Hierarchy depth of the sheet's outline.
    pub fn depth(&self) -> usize {
        self.title_levels.len()
    }
}

/// The level of a `Title {n}` column name, for canonical `n >= 1`.
fn title_level(name: &str) -> Option<usize> {
    let digits = name.strip_prefix("Title ")?;
    let level: usize = digits.parse().ok()?;
    (level >= 1 && level.to_string() == digits).then_some(level)
}

/// Classifies the columns of a cleaned sheet.
pub fn classify(sheet: &Sheet, max_title_levels: usize) -> ColumnLayout {
    let mut positional: Vec<(usize, usize)> = sheet
        .columns
        .iter()
        .enumerate()
        .filter_map(|(col, name)| {
            title_level(name)
                .filter(|level| *level <= max_title_levels)
                .map(|level| (level, col))
        })
        .collect();
    positional.sort_unstable();
    let title_levels = positional.into_iter().map(|(_, col)| col).collect();

    let type_columns = TYPE_COLUMN_ALIASES
        .iter()
        .filter_map(|alias| sheet.column_index(alias))
        .collect();

    let state_column = sheet.column_index(STATE_COLUMN);

    let mut fallback_titles: Vec<usize> = sheet
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| {
            let lower = name.to_lowercase();
            TITLE_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(|(i, _)| i)
        .collect();

    if fallback_titles.is_empty() {
        let first_populated = (0..sheet.columns.len()).find(|&c| {
            sheet
                .rows
                .iter()
                .any(|row| row.get(c).is_some_and(|cell| !cell.is_empty()))
        });
        fallback_titles.extend(first_populated);
    }

    ColumnLayout {
        title_levels,
        type_columns,
        state_column,
        fallback_titles,
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
