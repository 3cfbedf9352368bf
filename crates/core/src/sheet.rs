// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory spreadsheet tables.
//!
//! A [`Workbook`] is an ordered list of named [`Sheet`]s. Each sheet is a
//! rectangular table with a header row of column names and data rows of
//! [`Cell`]s. Readers in [`crate::reader`] produce these; the extraction
//! engine only ever sees cleaned sheets.

use std::collections::HashMap;
use std::fmt;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Returns the trimmed text of the cell, or `None` if it is empty or blank.
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Cell::Number(n) if n.is_nan() => None,
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        }
    }

    /// Returns true if the cell is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => n.is_nan(),
            Cell::Bool(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text().unwrap_or_default())
    }
}

/// Integral floats render without a fractional part ("3", not "3.0").
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// A named table with a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Builds a sheet from a raw grid whose first row is the header.
    ///
    /// Blank header cells are named `Unnamed: {index}` and repeated names are
    /// suffixed `.1`, `.2`, ... so every column name is unique. Data rows are
    /// padded or truncated to the header width.
    pub fn from_grid(name: impl Into<String>, grid: Vec<Vec<Cell>>) -> Self {
        let mut rows = grid.into_iter();
        let header = rows.next().unwrap_or_default();

        let mut seen: HashMap<String, usize> = HashMap::new();
        let columns: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let base = cell.text().unwrap_or_else(|| format!("Unnamed: {i}"));
                let count = seen.entry(base.clone()).or_insert(0);
                let column = if *count == 0 {
                    base
                } else {
                    format!("{base}.{count}")
                };
                *count += 1;
                column
            })
            .collect();

        let width = columns.len();
        let rows = rows
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        Sheet {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Returns a copy with fully-empty rows and columns removed and column
    /// names trimmed.
    ///
    /// A column is empty when every data cell in it is empty; the header name
    /// alone does not keep a column alive.
    pub fn clean(&self) -> Sheet {
        let keep_cols: Vec<usize> = (0..self.columns.len())
            .filter(|&c| {
                self.rows
                    .iter()
                    .any(|row| row.get(c).is_some_and(|cell| !cell.is_empty()))
            })
            .collect();

        let columns = keep_cols
            .iter()
            .map(|&c| self.columns[c].trim().to_string())
            .collect();

        let rows = self
            .rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .map(|row| {
                keep_cols
                    .iter()
                    .map(|&c| row.get(c).cloned().unwrap_or(Cell::Empty))
                    .collect()
            })
            .collect();

        Sheet {
            name: self.name.clone(),
            columns,
            rows,
        }
    }

    /// Index of the column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns true if the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// An ordered collection of sheets read from one source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Workbook { sheets }
    }
}

#[cfg(test)]
#[path = "sheet_tests.rs"]
mod tests;
