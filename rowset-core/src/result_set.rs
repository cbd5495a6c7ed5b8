// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Reference-counted, immutable result sets.

use std::fmt::Write as _;
use std::ops::Index;
use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::schema::{Record, Value};

/// An ordered, immutable sequence of materialized rows.
///
/// Handles are reference counted: [`Clone`] hands out another reference to
/// the same rows and the storage is freed when the last handle is dropped
/// or [released](ResultSet::release). The row count is fixed at
/// construction.
///
/// Indexing out of range is a caller bug and panics.
#[derive(Debug)]
pub struct ResultSet<R> {
    rows: Arc<[R]>,
}

impl<R: Record> ResultSet<R> {
    /// Take ownership of already materialized rows.
    pub fn from_rows(rows: Vec<R>) -> Self {
        debug_assert!(rows.iter().all(R::conforms));
        Self { rows: rows.into() }
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of live handles to this result set's storage.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.rows)
    }

    /// Whether both handles refer to the same storage.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }

    /// Borrow row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn row(&self, index: usize) -> &R {
        match self.rows.get(index) {
            Some(row) => row,
            None => panic!(
                "row index {index} out of range for result set of {} rows",
                self.count()
            ),
        }
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Field `column` of row `index`.
    pub fn value(&self, index: usize, column: usize) -> Value<'_> {
        self.row(index).value(column)
    }

    /// Field `name` of row `index`, `None` if the schema has no such column.
    pub fn column_value(&self, index: usize, name: &str) -> Option<Value<'_>> {
        let column = R::column_index(name)?;
        Some(self.value(index, column))
    }

    /// Copy rows `[start, start + length)` into a new, independently owned
    /// result set.
    ///
    /// Text fields are shared with the source, so releasing the source
    /// never invalidates the copy.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie inside the result set. Use
    /// [`ResultSet::try_copy`] when the range comes from untrusted input.
    pub fn copy(&self, start: usize, length: usize) -> Self {
        match self.try_copy(start, length) {
            Ok(copy) => copy,
            Err(e) => panic!("{e}"),
        }
    }

    /// Checked [`ResultSet::copy`]; never returns a partial result.
    pub fn try_copy(&self, start: usize, length: usize) -> Result<Self> {
        let out_of_bounds = Error::RangeOutOfBounds {
            start,
            length,
            count: self.count(),
        };
        let end = start.checked_add(length).ok_or(out_of_bounds.clone())?;
        let rows = self.rows.get(start..end).ok_or(out_of_bounds)?;

        trace!(start, length, "Copying result set rows");
        Ok(Self {
            rows: rows.to_vec().into(),
        })
    }

    /// Whether row `index` of `self` and row `other_index` of `other` hold
    /// equal values in every field, NULLs included.
    pub fn row_equal(&self, index: usize, other: &Self, other_index: usize) -> bool {
        self.row(index) == other.row(other_index)
    }

    /// Whether row `index` of `self` and row `other_index` of `other` were
    /// read from the same backing record, whatever their field values.
    pub fn row_same(&self, index: usize, other: &Self, other_index: usize) -> bool {
        self.row(index).identity() == other.row(other_index).identity()
    }

    /// Give up this handle. Equivalent to dropping it.
    pub fn release(self) {
        drop(self);
    }

    /// Render one line per row: `"{label}: row {i}) v1 v2 ..."`.
    pub fn dump(&self, label: &str) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            let _ = write!(out, "{label}: row {i})");
            for value in row.values() {
                let _ = write!(out, " {value}");
            }
            out.push('\n');
        }
        out
    }
}

/// Value equality of `a[ia]` and `b[ib]`, see [`ResultSet::row_equal`].
pub fn row_equal<R: Record>(a: &ResultSet<R>, ia: usize, b: &ResultSet<R>, ib: usize) -> bool {
    a.row_equal(ia, b, ib)
}

/// Provenance equality of `a[ia]` and `b[ib]`, see [`ResultSet::row_same`].
pub fn row_same<R: Record>(a: &ResultSet<R>, ia: usize, b: &ResultSet<R>, ib: usize) -> bool {
    a.row_same(ia, b, ib)
}

impl<R> Clone for ResultSet<R> {
    /// Acquire another reference to the same rows.
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<R: Record> Default for ResultSet<R> {
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

impl<R: Record> Index<usize> for ResultSet<R> {
    type Output = R;

    fn index(&self, index: usize) -> &R {
        self.row(index)
    }
}

impl<'a, R: Record> IntoIterator for &'a ResultSet<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::mixed::Mixed;

    #[fixture]
    fn five() -> ResultSet<Mixed> {
        ResultSet::from_rows(vec![
            Mixed::new(1, "one").with_flag(true).with_code(10),
            Mixed::new(2, "two").with_flag(false),
            Mixed::new(3, "three").with_code(30),
            Mixed::new(4, "four"),
            Mixed::new(5, "five").with_flag(true).with_code(50),
        ])
    }

    #[rstest]
    fn test_count_and_access(five: ResultSet<Mixed>) {
        assert_eq!(five.count(), 5);
        assert!(!five.is_empty());
        assert_eq!(five.row(0).id, 1);
        assert_eq!(five[4].id, 5);
        assert!(five.get(5).is_none());
        assert_eq!(five.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[rstest]
    #[should_panic = "row index 5 out of range for result set of 5 rows"]
    fn test_row_out_of_range(five: ResultSet<Mixed>) {
        five.row(5);
    }

    #[rstest]
    fn test_column_value(five: ResultSet<Mixed>) {
        assert_eq!(five.column_value(1, "flag"), Some(Value::Bool(false)));
        assert_eq!(five.column_value(1, "code"), Some(Value::Null));
        assert_eq!(five.column_value(2, "name"), Some(Value::Text("three")));
        assert_eq!(five.column_value(2, "missing"), None);
    }

    #[rstest]
    fn test_clone_shares_storage(five: ResultSet<Mixed>) {
        assert_eq!(five.ref_count(), 1);
        let other = five.clone();
        assert!(other.shares_storage(&five));
        assert_eq!(five.ref_count(), 2);
        other.release();
        assert_eq!(five.ref_count(), 1);
    }

    #[rstest]
    fn test_copy_slice(five: ResultSet<Mixed>) {
        let copy = five.copy(1, 3);
        assert_eq!(copy.count(), 3);
        assert_eq!(copy.ref_count(), 1);
        assert!(!copy.shares_storage(&five));
        for i in 0..3 {
            assert!(copy.row_equal(i, &five, i + 1));
        }
    }

    #[rstest]
    fn test_copy_shares_text(five: ResultSet<Mixed>) {
        let copy = five.copy(0, 1);
        assert!(Arc::ptr_eq(&copy[0].name, &five[0].name));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(5, 0)]
    #[case(0, 5)]
    #[case(4, 1)]
    fn test_copy_valid_edges(five: ResultSet<Mixed>, #[case] start: usize, #[case] length: usize) {
        assert_eq!(five.try_copy(start, length).unwrap().count(), length);
    }

    #[rstest]
    #[case(6, 0)]
    #[case(0, 6)]
    #[case(3, 3)]
    #[case(1, usize::MAX)]
    fn test_try_copy_out_of_bounds(
        five: ResultSet<Mixed>,
        #[case] start: usize,
        #[case] length: usize,
    ) {
        assert_eq!(
            five.try_copy(start, length).unwrap_err(),
            Error::RangeOutOfBounds {
                start,
                length,
                count: 5
            }
        );
    }

    #[rstest]
    #[should_panic = "Range of 3 rows starting at 3 is out of bounds for a result set of 5 rows"]
    fn test_copy_out_of_bounds_panics(five: ResultSet<Mixed>) {
        five.copy(3, 3);
    }

    #[rstest]
    fn test_row_equal_null_handling(five: ResultSet<Mixed>) {
        let same_nulls = ResultSet::from_rows(vec![Mixed::new(4, "four")]);
        assert!(row_equal(&five, 3, &same_nulls, 0));

        let filled = ResultSet::from_rows(vec![Mixed::new(4, "four").with_code(0)]);
        assert!(!row_equal(&five, 3, &filled, 0));
        assert!(row_same(&five, 3, &filled, 0));
    }

    #[rstest]
    fn test_row_same_distinguishes_records(five: ResultSet<Mixed>) {
        let renamed = ResultSet::from_rows(vec![Mixed::new(1, "uno"), Mixed::new(9, "one")]);
        assert!(five.row_same(0, &renamed, 0));
        assert!(!five.row_equal(0, &renamed, 0));
        assert!(!five.row_same(0, &renamed, 1));
    }

    #[rstest]
    fn test_dump(five: ResultSet<Mixed>) {
        let dump = five.copy(1, 2).dump("copy");
        assert_eq!(
            dump,
            "copy: row 0) 2 false NULL two\ncopy: row 1) 3 NULL 30 three\n"
        );
    }

    #[test]
    fn test_default_is_empty() {
        let empty = ResultSet::<Mixed>::default();
        assert!(empty.is_empty());
        assert_eq!(empty.dump("empty"), "");
        assert_eq!(empty.copy(0, 0).count(), 0);
    }
}
