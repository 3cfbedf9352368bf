// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outline-to-hierarchy inference.
//!
//! Process catalogs encode their hierarchy positionally: a value in
//! `Title 2` is a child of the most recent value seen in `Title 1`, and so
//! on. There are no parent pointers, so row order carries the structure.
//!
//! [`HierarchyBuilder`] scans rows in file order, keeping an
//! [`AncestorChain`] (level → last title seen at that level). Writing a level
//! drops every deeper entry, which is what terminates a sub-outline when a
//! shallower value appears.

use std::collections::BTreeMap;

use crate::classify::ColumnLayout;
use crate::sheet::Cell;

/// Separator between area path segments.
pub const AREA_PATH_SEPARATOR: &str = "\\";

/// Where a row sits in the inferred hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub title: String,
    /// 1-based.
    pub level: usize,
    pub area_path: String,
}

/// Most recent title at each hierarchy level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorChain {
    levels: BTreeMap<usize, String>,
}

impl AncestorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `title` at `level` and forgets everything deeper.
    pub fn set(&mut self, level: usize, title: impl Into<String>) {
        self.levels.insert(level, title.into());
        self.levels.retain(|&l, _| l <= level);
    }

    pub fn get(&self, level: usize) -> Option<&str> {
        self.levels.get(&level).map(String::as_str)
    }

    /// Joins the titles at levels `1..=level`, skipping levels never set.
    pub fn area_path(&self, level: usize) -> String {
        self.levels
            .range(1..=level)
            .map(|(_, title)| title.as_str())
            .collect::<Vec<_>>()
            .join(AREA_PATH_SEPARATOR)
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

/// Stateful single pass over one sheet's rows.
///
/// Create one builder per sheet; the chain must not leak across sheets.
#[derive(Debug)]
pub struct HierarchyBuilder<'a> {
    layout: &'a ColumnLayout,
    chain: AncestorChain,
}

impl<'a> HierarchyBuilder<'a> {
    pub fn new(layout: &'a ColumnLayout) -> Self {
        HierarchyBuilder {
            layout,
            chain: AncestorChain::new(),
        }
    }

    /// Places the next row. Returns `None` when the row has no usable title.
    ///
    /// Populated title columns are visited shallowest to deepest and each
    /// one is written into the chain; the deepest gives the row's title and
    /// level. Rows with no positional title take their title from the
    /// fallback columns (or, failing that, the first non-empty cell) at
    /// level 1.
    pub fn place(&mut self, row: &[Cell]) -> Option<Placement> {
        let mut deepest: Option<(String, usize)> = None;
        for (pos, &col) in self.layout.title_levels.iter().enumerate() {
            if let Some(title) = row.get(col).and_then(Cell::text) {
                let level = pos + 1;
                self.chain.set(level, title.clone());
                deepest = Some((title, level));
            }
        }

        let (title, level) = match deepest {
            Some(found) => found,
            None => {
                let title = self.fallback_title(row)?;
                self.chain.set(1, title.clone());
                (title, 1)
            }
        };

        Some(Placement {
            area_path: self.chain.area_path(level),
            title,
            level,
        })
    }

    fn fallback_title(&self, row: &[Cell]) -> Option<String> {
        self.layout
            .fallback_titles
            .iter()
            .find_map(|&col| row.get(col).and_then(Cell::text))
            .or_else(|| row.iter().find_map(Cell::text))
    }

    /// The current ancestor chain.
    pub fn chain(&self) -> &AncestorChain {
        &self.chain
    }
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;
