// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Write operations on the `mixed` table.
//!
//! These set up and mutate the data the result sets are fetched from.

use rowset_core::Mixed;
use rusqlite::params;
use tracing::debug;

use crate::connection::Db;
use crate::error::{QueryContext, Result};
use crate::schema::{INSERT_MIXED_SQL, MIXED_SCHEMA_SQL, UPDATE_MIXED_SQL};

/// Rows inserted by [`Db::load_mixed`], in key order.
pub fn seed_rows() -> Vec<Mixed> {
    vec![
        Mixed::new(1, "a name").with_flag(true).with_code(12),
        Mixed::new(2, "another name").with_flag(false).with_code(14),
        Mixed::new(3, "no flag").with_code(15),
        Mixed::new(4, "no code").with_flag(true),
        Mixed::new(5, "nothing set"),
    ]
}

impl Db {
    /// Create the `mixed` table.
    pub fn make_mixed(&self) -> Result<()> {
        self.conn
            .execute_batch(MIXED_SCHEMA_SQL)
            .query_context(MIXED_SCHEMA_SQL)?;
        debug!("Created mixed table");
        Ok(())
    }

    /// Insert the five seed rows, ids 1 through 5.
    pub fn load_mixed(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx
                .prepare_cached(INSERT_MIXED_SQL)
                .query_context(INSERT_MIXED_SQL)?;
            for row in seed_rows() {
                stmt.execute(params![row.id, row.flag, row.code, &*row.name])
                    .query_context(INSERT_MIXED_SQL)?;
            }
        }
        tx.commit()?;
        debug!("Loaded mixed rows");
        Ok(())
    }

    /// Insert a single row.
    pub fn insert_mixed(&self, row: &Mixed) -> Result<()> {
        self.conn
            .execute(
                INSERT_MIXED_SQL,
                params![row.id, row.flag, row.code, &*row.name],
            )
            .query_context(INSERT_MIXED_SQL)?;
        Ok(())
    }

    /// Set `code` of the record with key `id`.
    ///
    /// Returns whether a record was changed.
    pub fn update_mixed(&self, id: i32, code: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute(UPDATE_MIXED_SQL, params![id, code])
            .query_context(UPDATE_MIXED_SQL)?;
        debug!(id, code, changed, "Updated mixed row");
        Ok(changed > 0)
    }
}
