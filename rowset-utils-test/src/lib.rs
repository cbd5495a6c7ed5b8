// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Test utilities for rowset.
//!
//! This crate provides proptest strategies and fixtures shared by the
//! rowset test suites.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use rowset_core::{Mixed, ResultSet};
use tempfile::TempDir;

/// A temporary directory holding database files.
///
/// The path is canonicalized, resolving symlinks like /var -> /private/var
/// on macOS.
pub struct TempDbDir {
    _inner: TempDir,
    path: PathBuf,
}

impl TempDbDir {
    pub fn new() -> std::io::Result<Self> {
        let inner = TempDir::new()?;
        let path = inner.path().canonicalize()?;
        Ok(Self {
            _inner: inner,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a database file named `name` inside the directory.
    pub fn db_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

pub fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,24}"
}

prop_compose! {
    pub fn arb_mixed_with_id(id: i32)(
        flag in any::<Option<bool>>(),
        code in any::<Option<i64>>(),
        name in arb_name(),
    ) -> Mixed {
        Mixed::new(id, name).with_flag(flag).with_code(code)
    }
}

pub fn arb_mixed() -> impl Strategy<Value = Mixed> {
    any::<i32>().prop_flat_map(arb_mixed_with_id)
}

/// Rows with pairwise distinct ids, as read from a table keyed on `id`.
pub fn arb_mixed_rows(max: usize) -> impl Strategy<Value = Vec<Mixed>> {
    proptest::collection::btree_set(any::<i32>(), 0..=max).prop_flat_map(|ids: BTreeSet<i32>| {
        ids.into_iter()
            .map(arb_mixed_with_id)
            .collect::<Vec<_>>()
    })
}

pub fn arb_result_set(max: usize) -> impl Strategy<Value = ResultSet<Mixed>> {
    arb_mixed_rows(max).prop_map(ResultSet::from_rows)
}

/// A result set together with a `(start, length)` range inside it.
pub fn arb_result_set_with_range(
    max: usize,
) -> impl Strategy<Value = (ResultSet<Mixed>, usize, usize)> {
    arb_result_set(max).prop_flat_map(|rs| {
        let count = rs.count();
        (Just(rs), 0..=count)
            .prop_flat_map(move |(rs, start)| (Just(rs), Just(start), 0..=(count - start)))
    })
}
