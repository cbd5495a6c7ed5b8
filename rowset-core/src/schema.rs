// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Row schema descriptors.
//!
//! A row type describes itself through [`Record`]: the ordered column list,
//! which of those columns make up the record identity, and a borrowed view
//! of each field. Result sets are generic over this trait, so every row type
//! gets counting, slicing and both kinds of comparison for free.

use std::fmt;

/// Storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Bool,
    Int32,
    Int64,
    Real,
    Text,
}

/// A single column of a row schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    /// Column name as it appears in the result of the query
    pub name: &'static str,
    /// Storage class of non-null values
    pub ty: ColumnType,
    /// Whether the column may hold NULL
    pub nullable: bool,
}

impl Column {
    /// A column that never holds NULL.
    pub const fn required(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
        }
    }

    /// A column that may hold NULL.
    pub const fn nullable(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: true,
        }
    }
}

/// Borrowed value of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Real(f64),
    Text(&'a str),
}

impl Value<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Storage class of the value, `None` for NULL.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(ColumnType::Bool),
            Value::Int32(_) => Some(ColumnType::Int32),
            Value::Int64(_) => Some(ColumnType::Int64),
            Value::Real(_) => Some(ColumnType::Real),
            Value::Text(_) => Some(ColumnType::Text),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<f64> for Value<'_> {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A materialized row with a fixed schema.
///
/// `PartialEq` is value equality over every field; nullable fields are
/// `Option`s, so two NULLs compare equal and NULL never equals a value.
/// [`Record::identity`] is the provenance of the row: the key of the
/// backing record it was read from.
pub trait Record: Clone + PartialEq + fmt::Debug {
    /// Key identifying the backing record, stable across fetches.
    type Identity: PartialEq + fmt::Debug;

    /// Columns in result order.
    const COLUMNS: &'static [Column];

    /// Names of the columns forming [`Record::Identity`].
    const IDENTITY: &'static [&'static str];

    fn identity(&self) -> Self::Identity;

    /// Borrow the field at `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column >= Self::COLUMNS.len()`.
    fn value(&self, column: usize) -> Value<'_>;

    fn column_index(name: &str) -> Option<usize> {
        Self::COLUMNS.iter().position(|c| c.name == name)
    }

    fn values(&self) -> impl Iterator<Item = Value<'_>> {
        (0..Self::COLUMNS.len()).map(move |i| self.value(i))
    }

    /// Check that every field matches its column: NULL only where nullable,
    /// otherwise a value of the declared type.
    fn conforms(&self) -> bool {
        Self::COLUMNS
            .iter()
            .zip(self.values())
            .all(|(column, value)| match value.column_type() {
                None => column.nullable,
                Some(ty) => ty == column.ty,
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Value::Null, "NULL")]
    #[case(Value::Bool(true), "true")]
    #[case(Value::Int32(-7), "-7")]
    #[case(Value::Int64(1234), "1234")]
    #[case(Value::Real(2.5), "2.5")]
    #[case(Value::Text("hello"), "hello")]
    fn test_value_display(#[case] value: Value<'_>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(5i64)), Value::Int64(5));
        assert_eq!(Value::from(Some("x")), Value::Text("x"));
        assert!(Value::from(None::<bool>).is_null());
        assert_eq!(Value::Null.column_type(), None);
        assert_eq!(Value::Int32(1).column_type(), Some(ColumnType::Int32));
    }
}
