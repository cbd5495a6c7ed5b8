// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Error types for database operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during database operations.
///
/// Engine failures are passed through unchanged; the executor never retries.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Database file not found
    #[error("Database not found at: {0}")]
    DatabaseNotFound(PathBuf),

    /// A statement failed to prepare, bind, step or decode
    #[error("Query failed: {statement}: {source}")]
    Query {
        statement: String,
        #[source]
        source: rusqlite::Error,
    },
}

/// Helper trait for attaching the statement text to engine errors.
pub(crate) trait QueryContext<T> {
    fn query_context(self, statement: &str) -> Result<T>;
}

impl<T> QueryContext<T> for std::result::Result<T, rusqlite::Error> {
    fn query_context(self, statement: &str) -> Result<T> {
        self.map_err(|source| Error::Query {
            statement: statement.trim().to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_context_keeps_statement() {
        let failed: std::result::Result<(), _> = Err(rusqlite::Error::InvalidQuery);
        let err = failed.query_context("\n  select 1\n").unwrap_err();
        match &err {
            Error::Query { statement, .. } => assert_eq!(statement, "select 1"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Query failed: select 1: "));
    }
}
