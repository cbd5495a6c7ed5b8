// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Database schema definitions.

/// The `mixed` table: one required key, nullable `flag` and `code` columns
/// and a required `name`.
pub const MIXED_SCHEMA_SQL: &str = r#"
create table if not exists mixed (
    id   integer primary key not null,
    flag bool,
    code long int,
    name text not null
);
"#;

/// Rows in key order, up to a limit.
pub(crate) const SELECT_MIXED_SQL: &str = r#"
select id, flag, code, name
from mixed
order by id
limit ?1
"#;

pub(crate) const INSERT_MIXED_SQL: &str = r#"
insert into mixed (id, flag, code, name)
values (?1, ?2, ?3, ?4)
"#;

pub(crate) const UPDATE_MIXED_SQL: &str = r#"
update mixed set code = ?2 where id = ?1
"#;
