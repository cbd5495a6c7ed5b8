// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{DemoError, IoContext};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ROWSET_CONFIG";

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rowset.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database file, or `:memory:` for a private in-memory database
    pub database: String,

    /// Row limit of both fetches
    pub fetch_limit: i32,

    /// First row of the copied range
    pub copy_start: usize,

    /// Number of rows copied
    pub copy_length: usize,

    /// Value written to `code` of the first fetched record
    pub update_code: i64,

    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: rowset_db::MEMORY.to_string(),
            fetch_limit: 5,
            copy_start: 1,
            copy_length: 3,
            update_code: 1234,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, DemoError> {
        let contents = std::fs::read_to_string(path)
            .io_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        // The identity checks compare the first two records.
        if self.fetch_limit < 2 {
            return Err(DemoError::config("fetch_limit must be at least 2"));
        }
        // Only the seed rows exist, so a larger limit comes back short.
        let seeded = rowset_db::seed_rows().len();
        if self.fetch_limit as usize > seeded {
            return Err(DemoError::config(format!(
                "fetch_limit {} exceeds the {seeded} seeded rows",
                self.fetch_limit
            )));
        }
        let end = self.copy_start.checked_add(self.copy_length);
        if end.is_none_or(|end| end > self.fetch_limit as usize) {
            return Err(DemoError::config(format!(
                "copy range {}+{} exceeds fetch_limit {}",
                self.copy_start, self.copy_length, self.fetch_limit
            )));
        }
        Ok(())
    }
}

/// Load the configuration named by `ROWSET_CONFIG`, falling back to
/// `rowset.toml` in the working directory and then to the defaults.
pub fn load() -> Result<Config, DemoError> {
    load_from(std::env::var_os(CONFIG_ENV), Path::new(DEFAULT_CONFIG_FILE))
}

/// Resolve the configuration from an explicit file, else `default_file` if it
/// exists, else the defaults.
///
/// An explicit file that cannot be read is an error; it never falls back.
pub fn load_from(explicit: Option<OsString>, default_file: &Path) -> Result<Config, DemoError> {
    let path = explicit
        .map(PathBuf::from)
        .or_else(|| Some(default_file.to_owned()).filter(|p| p.exists()));

    match path {
        Some(path) => Config::from_file(&path),
        None => Ok(Config::default()),
    }
}
