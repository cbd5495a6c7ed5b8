// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! SQLite query executor for rowset.
//!
//! This crate runs queries against a SQLite database and materializes their
//! rows into [`rowset_core::ResultSet`]s. It also owns the `mixed` table the
//! demo operates on: creating it, seeding it and updating records.
//!
//! # Example
//!
//! ```
//! use rowset_db::Db;
//!
//! let mut db = Db::open_memory()?;
//! db.make_mixed()?;
//! db.load_mixed()?;
//!
//! let before = db.fetch_mixed(5)?;
//! db.update_mixed(before[0].id, 1234)?;
//! let after = db.fetch_mixed(5)?;
//!
//! assert!(before.row_same(0, &after, 0));
//! assert!(!before.row_equal(0, &after, 0));
//! # Ok::<(), rowset_db::Error>(())
//! ```

mod connection;
mod error;
mod query;
mod schema;
mod write;

pub use connection::{Db, MEMORY, OpenMode};
pub use error::{Error, Result};
pub use query::FromSqlRow;
pub use schema::MIXED_SCHEMA_SQL;
pub use write::seed_rows;
