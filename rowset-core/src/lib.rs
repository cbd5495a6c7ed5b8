// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Materialized, reference-counted SQL result sets.
//!
//! A [`ResultSet`] owns the rows produced by one query, copied out of the
//! database engine so it stays valid after the statement is gone. It can be
//! sliced into independent copies and its rows compared in two ways:
//!
//! - [`row_equal`]: every field holds the same value (NULLs included)
//! - [`row_same`]: both rows were read from the same backing record
//!
//! Comparing a fetch from before an update with one from after it tells the
//! two apart: the updated record is still `row_same` but no longer
//! `row_equal`.
//!
//! Row types describe their columns and identity through [`Record`].
//!
//! # Example
//!
//! ```
//! use rowset_core::{Mixed, ResultSet};
//!
//! let rows = ResultSet::from_rows(vec![
//!     Mixed::new(1, "one").with_code(10),
//!     Mixed::new(2, "two"),
//! ]);
//! let updated = ResultSet::from_rows(vec![Mixed::new(1, "one").with_code(1234)]);
//!
//! assert!(rows.row_same(0, &updated, 0));
//! assert!(!rows.row_equal(0, &updated, 0));
//! assert!(rows.copy(1, 1).row_equal(0, &rows, 1));
//! ```

mod error;
mod mixed;
mod result_set;
mod schema;

pub use error::{Error, Result};
pub use mixed::Mixed;
pub use result_set::{ResultSet, row_equal, row_same};
pub use schema::{Column, ColumnType, Record, Value};
