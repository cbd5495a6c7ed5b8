// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Error types for result set operations.

use thiserror::Error;

/// Result type for result set operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the checked result set operations.
///
/// The unchecked variants (`copy`, `row`, indexing) panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Copy range does not fit inside the source
    #[error("Range of {length} rows starting at {start} is out of bounds for a result set of {count} rows")]
    RangeOutOfBounds {
        start: usize,
        length: usize,
        count: usize,
    },
}
