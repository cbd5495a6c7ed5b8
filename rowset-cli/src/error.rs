// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Database error: {0}")]
    Db(#[from] rowset_db::Error),

    #[error("Result set error: {0}")]
    ResultSet(#[from] rowset_core::Error),

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Check failed: {0}")]
    Check(String),
}

impl DemoError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

/// Helper trait for adding context to IO errors
pub trait IoContext<T> {
    fn io_context<F>(self, f: F) -> Result<T, DemoError>
    where
        F: FnOnce() -> String;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<F>(self, f: F) -> Result<T, DemoError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DemoError::io(f(), e))
    }
}
