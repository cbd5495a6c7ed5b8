// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Read queries materializing result sets.

use rowset_core::{Mixed, Record, ResultSet};
use rusqlite::{Params, Row, params};
use tracing::{debug, trace};

use crate::connection::Db;
use crate::error::{QueryContext, Result};
use crate::schema::SELECT_MIXED_SQL;

/// A row type that can be decoded from a SQLite result row.
///
/// Decoding copies every field out of the statement, so the decoded row
/// stays valid after the statement is finalized.
pub trait FromSqlRow: Record {
    fn from_sql_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl FromSqlRow for Mixed {
    fn from_sql_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Mixed {
            id: row.get(0)?,
            flag: row.get(1)?,
            code: row.get(2)?,
            name: row.get::<_, String>(3)?.into(),
        })
    }
}

impl Db {
    /// Run `sql` with `params` and materialize every result row.
    ///
    /// Either all rows decode or the whole fetch fails; engine errors are
    /// returned unchanged, with the statement attached.
    pub fn fetch<R: FromSqlRow, P: Params>(&self, sql: &str, params: P) -> Result<ResultSet<R>> {
        trace!(statement = sql.trim(), "Fetching result set");
        let mut stmt = self.conn.prepare_cached(sql).query_context(sql)?;
        let rows = stmt
            .query_map(params, R::from_sql_row)
            .query_context(sql)?
            .collect::<rusqlite::Result<Vec<R>>>()
            .query_context(sql)?;

        debug!(rows = rows.len(), "Fetched result set");
        Ok(ResultSet::from_rows(rows))
    }

    /// Fetch up to `limit` rows of the `mixed` table in key order.
    ///
    /// Fewer rows are returned when the table is shorter. A negative limit
    /// fetches every row.
    pub fn fetch_mixed(&self, limit: i32) -> Result<ResultSet<Mixed>> {
        self.fetch(SELECT_MIXED_SQL, params![limit])
    }

    /// Count the rows of the `mixed` table.
    pub fn count_mixed(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM mixed", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nulls() {
        let db = Db::open_memory().unwrap();
        let rs: ResultSet<Mixed> = db
            .fetch("SELECT 7, NULL, NULL, 'seven'", [])
            .unwrap();
        assert_eq!(rs.count(), 1);
        assert_eq!(rs[0], Mixed::new(7, "seven"));
    }

    #[test]
    fn test_decode_values() {
        let db = Db::open_memory().unwrap();
        let rs: ResultSet<Mixed> = db
            .fetch("SELECT ?1, 1, 9000000000, 'big'", params![8])
            .unwrap();
        assert_eq!(
            rs[0],
            Mixed::new(8, "big").with_flag(true).with_code(9_000_000_000)
        );
    }

    #[test]
    fn test_decode_failure_fails_whole_fetch() {
        let db = Db::open_memory().unwrap();
        let err = db
            .fetch::<Mixed, _>(
                "SELECT 1, NULL, NULL, 'ok' UNION ALL SELECT 2, NULL, NULL, NULL",
                [],
            )
            .unwrap_err();
        assert!(matches!(err, crate::Error::Query { .. }), "{err}");
    }
}
