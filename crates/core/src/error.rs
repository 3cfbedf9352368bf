// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for procat-core operations.

use thiserror::Error;

/// All possible errors that can occur in procat-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("merge needs at least 2 models, got {count}\n  hint: pass two or more model ids")]
    TooFewModels { count: usize },

    #[error("merge name cannot be blank")]
    BlankMergeName,

    #[error("field '{field}' cannot be bulk-edited\n  hint: work item ids must stay unique within a model")]
    ProtectedField { field: String },

    #[error("invalid value '{value}' for field '{field}'")]
    InvalidFieldValue { field: String, value: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("cannot read spreadsheet: {0}")]
    Ingest(String),

    #[error("spreadsheet has no sheets: {0}")]
    NoSheets(String),

    #[error("unsupported spreadsheet format: '{0}'\n  hint: supported formats are: xlsx, xlsm, xlsb, xls, ods, csv")]
    UnsupportedFormat(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns true for errors raised while validating caller input, before
    /// any storage access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::TooFewModels { .. }
                | Error::BlankMergeName
                | Error::ProtectedField { .. }
                | Error::InvalidFieldValue { .. }
                | Error::InvalidInput(_)
        )
    }

    /// Returns true for errors raised while reading source spreadsheets.
    pub fn is_ingest(&self) -> bool {
        matches!(
            self,
            Error::Ingest(_) | Error::NoSheets(_) | Error::UnsupportedFormat(_)
        )
    }
}

impl From<calamine::Error> for Error {
    fn from(e: calamine::Error) -> Self {
        Error::Ingest(e.to_string())
    }
}

/// A specialized Result type for procat-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
