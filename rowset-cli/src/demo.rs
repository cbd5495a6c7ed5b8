// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! The demo scenario: fetch, copy, update, fetch again, compare.

use std::io::Write;

use rowset_core::{Mixed, ResultSet, row_equal, row_same};
use rowset_db::Db;
use tracing::info;

use crate::config::Config;
use crate::error::{DemoError, IoContext};

/// Result sets produced by a successful run.
#[derive(Debug)]
pub struct Outcome {
    pub result_set: ResultSet<Mixed>,
    pub result_set_copy: ResultSet<Mixed>,
    pub result_set_updated: ResultSet<Mixed>,
}

fn check(condition: bool, what: impl FnOnce() -> String) -> Result<(), DemoError> {
    if condition {
        Ok(())
    } else {
        Err(DemoError::Check(what()))
    }
}

/// Run the scenario against the configured database, printing every result
/// set to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<Outcome, DemoError> {
    config.validate()?;

    writeln!(out, "rowset demo: creating and reading from a table")
        .and_then(|()| writeln!(out, "Database Path: {}\n", config.database))
        .io_context(|| "Failed to write demo output".to_string())?;

    let mut db = Db::open_at(&config.database)?;
    db.make_mixed()?;
    db.load_mixed()?;

    let limit = config.fetch_limit;
    let result_set = db.fetch_mixed(limit)?;
    check(result_set.count() == limit as usize, || {
        format!("fetched {} rows, expected {limit}", result_set.count())
    })?;

    let (start, length) = (config.copy_start, config.copy_length);
    let result_set_copy = result_set.try_copy(start, length)?;
    check(result_set_copy.count() == length, || {
        format!("copied {} rows, expected {length}", result_set_copy.count())
    })?;

    let updated_id = result_set[0].id;
    db.update_mixed(updated_id, config.update_code)?;
    let result_set_updated = db.fetch_mixed(limit)?;
    info!(id = updated_id, code = config.update_code, "Updated first record");

    for (label, rs) in [
        ("result_set", &result_set),
        ("result_set_copy", &result_set_copy),
        ("result_set_updated", &result_set_updated),
    ] {
        out.write_all(rs.dump(label).as_bytes())
            .io_context(|| format!("Failed to write {label}"))?;
    }

    for i in 0..length {
        check(row_equal(&result_set, start + i, &result_set_copy, i), || {
            format!("copy row {i} differs from source row {}", start + i)
        })?;
    }

    check(row_same(&result_set, 0, &result_set_updated, 0), || {
        "updated record lost its identity".to_string()
    })?;
    check(row_same(&result_set, 1, &result_set_updated, 1), || {
        "untouched record lost its identity".to_string()
    })?;
    check(!row_same(&result_set, 0, &result_set_updated, 1), || {
        "distinct records reported as the same".to_string()
    })?;
    let unchanged = result_set[0].code == Some(config.update_code);
    check(
        row_equal(&result_set, 0, &result_set_updated, 0) == unchanged,
        || "refetched first record does not reflect the update".to_string(),
    )?;

    db.close()?;
    info!("All checks passed");

    Ok(Outcome {
        result_set,
        result_set_copy,
        result_set_updated,
    })
}
