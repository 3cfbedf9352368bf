// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed model store.
//!
//! Each [`ProcessModel`] is one row of the `models` table; the summary and
//! work items are stored as JSON documents alongside the listing columns.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{ModelListing, ProcessModel, Summary, WorkItem};
use crate::store::ModelStore;

/// SQL schema for the model store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS models (
    id TEXT PRIMARY KEY,
    filename TEXT NOT NULL,
    created_at TEXT NOT NULL,
    source TEXT NOT NULL,
    summary TEXT NOT NULL,       -- JSON
    work_items TEXT NOT NULL     -- JSON array
);

CREATE INDEX IF NOT EXISTS idx_models_created ON models(created_at DESC);
"#;

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Parse a JSON document from the database.
fn parse_json<T: DeserializeOwned>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    serde_json::from_str(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid json in column '{column}': {e}"
            ))),
        )
    })
}

/// Apply the schema. Safe to run on every open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

fn listing_from_row(row: &Row<'_>) -> std::result::Result<ModelListing, rusqlite::Error> {
    let created_at: String = row.get("created_at")?;
    let summary: String = row.get("summary")?;
    Ok(ModelListing {
        id: row.get("id")?,
        filename: row.get("filename")?,
        created_at: parse_timestamp(&created_at, "created_at")?,
        source: row.get("source")?,
        summary: parse_json::<Summary>(&summary, "summary")?,
    })
}

/// SQLite connection wrapper implementing [`ModelStore`].
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Number of stored models.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM models", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

impl ModelStore for Database {
    fn get(&self, id: &str) -> Result<Option<ProcessModel>> {
        let found = self
            .conn
            .query_row(
                "SELECT id, filename, created_at, source, summary, work_items
                 FROM models WHERE id = ?1",
                params![id],
                |row| {
                    let listing = listing_from_row(row)?;
                    let items: String = row.get("work_items")?;
                    let work_items = parse_json::<Vec<WorkItem>>(&items, "work_items")?;
                    Ok(ProcessModel {
                        id: listing.id,
                        filename: listing.filename,
                        created_at: listing.created_at,
                        source: listing.source,
                        work_items,
                        summary: listing.summary,
                    })
                },
            )
            .optional()?;
        Ok(found)
    }

    fn list(&self) -> Result<Vec<ModelListing>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, filename, created_at, source, summary
             FROM models ORDER BY created_at DESC, id",
        )?;
        let rows = stmt.query_map([], listing_from_row)?;

        let mut listings = Vec::new();
        for row in rows {
            match row {
                Ok(listing) => listings.push(listing),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable model row"),
            }
        }
        Ok(listings)
    }

    fn save(&mut self, model: &ProcessModel) -> Result<()> {
        let summary = serde_json::to_string(&model.summary)?;
        let work_items = serde_json::to_string(&model.work_items)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO models (id, filename, created_at, source, summary, work_items)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                model.id,
                model.filename,
                model.created_at.to_rfc3339(),
                model.source,
                summary,
                work_items,
            ],
        )?;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM models WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    fn exists(&self, id: &str) -> Result<bool> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM models WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
