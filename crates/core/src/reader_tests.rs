// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use calamine::{CellErrorType, ExcelDateTime, ExcelDateTimeType};
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn read_csv_names_sheet_after_file_stem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Order to Cash.csv");
    std::fs::write(&path, "Title 1,Title 2\nSell,\n,Quote\n").unwrap();

    let workbook = read_workbook(&path).unwrap();
    assert_eq!(workbook.sheets.len(), 1);
    let sheet = &workbook.sheets[0];
    assert_eq!(sheet.name, "Order to Cash");
    assert_eq!(sheet.columns, vec!["Title 1", "Title 2"]);
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[1][1].text().as_deref(), Some("Quote"));
}

#[test]
fn read_csv_strips_byte_order_mark() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bom.csv");
    std::fs::write(&path, "\u{feff}Title 1\nA\n").unwrap();

    let workbook = read_workbook(&path).unwrap();
    assert_eq!(workbook.sheets[0].columns, vec!["Title 1"]);
}

#[test]
fn read_csv_tolerates_ragged_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged.csv");
    std::fs::write(&path, "A,B,C\n1\n1,2,3,4\n").unwrap();

    let sheet = &read_workbook(&path).unwrap().sheets[0];
    assert_eq!(sheet.rows[0].len(), 3);
    assert_eq!(sheet.rows[1].len(), 3);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let err = read_workbook(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == "txt"));
}

#[test]
fn corrupt_workbook_is_an_ingest_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let err = read_workbook(&path).unwrap_err();
    assert!(err.is_ingest());
}

#[test]
fn missing_csv_is_an_ingest_error() {
    let dir = TempDir::new().unwrap();
    let err = read_workbook(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Ingest(_)));
}

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[parameterized(
    float = { Data::Float(2.5), Cell::Number(2.5) },
    int = { Data::Int(7), Cell::Number(7.0) },
    boolean = { Data::Bool(true), Cell::Bool(true) },
    string = { Data::String("Sell".into()), Cell::Text("Sell".into()) },
    empty = { Data::Empty, Cell::Empty },
    not_available = { Data::Error(CellErrorType::NA), Cell::Empty },
    div_zero = { Data::Error(CellErrorType::Div0), Cell::Empty },
    iso_date = { Data::DateTimeIso("2024-01-01T00:00:00".into()), Cell::Text("2024-01-01T00:00:00".into()) },
    iso_duration = { Data::DurationIso("PT1H".into()), Cell::Text("PT1H".into()) },
)]
fn cell_from_data_maps(data: Data, expected: Cell) {
    assert_eq!(cell_from_data(&data), expected);
}

#[test]
fn cell_from_data_formats_dates() {
    let date = Data::DateTime(ExcelDateTime::new(45292.0, ExcelDateTimeType::DateTime, false));
    assert_eq!(
        cell_from_data(&date),
        Cell::Text("2024-01-01 00:00:00".into())
    );

    let afternoon = Data::DateTime(ExcelDateTime::new(45292.75, ExcelDateTimeType::DateTime, false));
    assert_eq!(
        cell_from_data(&afternoon),
        Cell::Text("2024-01-01 18:00:00".into())
    );
}

#[test]
fn cell_from_data_keeps_durations_numeric() {
    let duration = Data::DateTime(ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false));
    assert_eq!(cell_from_data(&duration), Cell::Number(1.5));
}

#[test]
fn read_xlsx_fixture() {
    let workbook = read_workbook(&fixture("catalog.xlsx")).unwrap();
    assert_eq!(workbook.sheets.len(), 1);

    let sheet = &workbook.sheets[0];
    assert_eq!(sheet.name, "Order to Cash");
    assert_eq!(
        sheet.columns,
        vec!["Title 1", "Title 2", "Work Item Type", "Priority", "Due Date", "Approved", "Owner"]
    );
    assert_eq!(sheet.rows.len(), 2);

    let first = &sheet.rows[0];
    assert_eq!(first[0], Cell::Text("Sell".into()));
    assert_eq!(first[1], Cell::Empty);
    assert_eq!(first[3], Cell::Number(1.0));
    assert_eq!(first[4], Cell::Text("2024-01-01 00:00:00".into()));
    assert_eq!(first[5], Cell::Bool(true));
    assert_eq!(first[6], Cell::Empty);

    let second = &sheet.rows[1];
    assert_eq!(second[1], Cell::Text("Quote".into()));
    assert_eq!(second[3], Cell::Number(2.5));
    assert_eq!(second[4], Cell::Empty);
    assert_eq!(second[5], Cell::Bool(false));
    assert_eq!(second[6], Cell::Text("Ops".into()));
}
