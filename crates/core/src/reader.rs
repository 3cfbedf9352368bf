// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spreadsheet readers.
//!
//! Excel and OpenDocument workbooks are read with `calamine`; CSV files are
//! read with `csv` as a single sheet named after the file stem. Either way
//! the first row of every sheet is its header.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{Error, Result};
use crate::sheet::{Cell, Sheet, Workbook};

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads every sheet of the spreadsheet at `path`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions,
/// [`Error::Ingest`] when the file cannot be parsed and [`Error::NoSheets`]
/// when it parses but contains no sheets.
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let workbook = if ext == "csv" {
        read_csv(path)?
    } else if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        read_excel(path)?
    } else {
        return Err(Error::UnsupportedFormat(ext));
    };

    if workbook.sheets.is_empty() {
        return Err(Error::NoSheets(path.display().to_string()));
    }
    tracing::debug!(
        "read {} sheet(s) from {}",
        workbook.sheets.len(),
        path.display()
    );
    Ok(workbook)
}

fn read_excel(path: &Path) -> Result<Workbook> {
    let mut source = open_workbook_auto(path)?;
    let mut sheets = Vec::new();
    for name in source.sheet_names() {
        let range = source.worksheet_range(&name)?;
        let grid: Vec<Vec<Cell>> = range
            .rows()
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();
        sheets.push(Sheet::from_grid(name, grid));
    }
    Ok(Workbook::new(sheets))
}

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error cells (`#N/A`, `#REF!`, ...) read as blanks.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) if dt.is_datetime() => dt
            .as_datetime()
            .map(|d| Cell::Text(d.format(DATETIME_FORMAT).to_string()))
            .unwrap_or(Cell::Number(dt.as_f64())),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
    }
}

/// Reads a CSV file as a one-sheet workbook named after the file stem.
pub fn read_csv(path: &Path) -> Result<Workbook> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Ingest(e.to_string()))?;

    let mut grid: Vec<Vec<Cell>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Ingest(e.to_string()))?;
        grid.push(record.iter().map(Cell::from).collect());
    }
    if let Some(first) = grid.first_mut().and_then(|row| row.first_mut()) {
        // Spreadsheet tools often prepend a UTF-8 BOM to the first header.
        if let Cell::Text(s) = first {
            *s = s.trim_start_matches('\u{feff}').to_string();
        }
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet1")
        .to_string();
    Ok(Workbook::new(vec![Sheet::from_grid(name, grid)]))
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
