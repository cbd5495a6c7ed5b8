// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Row type of the `mixed` table.

use std::sync::Arc;

use crate::schema::{Column, ColumnType, Record, Value};

/// A row of the `mixed` table: a required key, two nullable scalars and a
/// required name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mixed {
    /// Primary key, the identity of the row
    pub id: i32,
    pub flag: Option<bool>,
    pub code: Option<i64>,
    /// Shared text; copies of the row share the allocation
    pub name: Arc<str>,
}

impl Mixed {
    pub fn new(id: i32, name: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            flag: None,
            code: None,
            name: name.into(),
        }
    }

    pub fn with_flag(mut self, flag: impl Into<Option<bool>>) -> Self {
        self.flag = flag.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<Option<i64>>) -> Self {
        self.code = code.into();
        self
    }
}

impl Record for Mixed {
    type Identity = i32;

    const COLUMNS: &'static [Column] = &[
        Column::required("id", ColumnType::Int32),
        Column::nullable("flag", ColumnType::Bool),
        Column::nullable("code", ColumnType::Int64),
        Column::required("name", ColumnType::Text),
    ];

    const IDENTITY: &'static [&'static str] = &["id"];

    fn identity(&self) -> i32 {
        self.id
    }

    fn value(&self, column: usize) -> Value<'_> {
        match column {
            0 => self.id.into(),
            1 => self.flag.into(),
            2 => self.code.into(),
            3 => (&*self.name).into(),
            _ => panic!(
                "column index {column} out of range for {} columns",
                Self::COLUMNS.len()
            ),
        }
    }
}
