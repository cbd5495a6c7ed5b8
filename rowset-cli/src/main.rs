// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use rowset_cli::config::{self, Config};
use rowset_cli::demo;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("rowset-demo: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    info!("Database path: {}", config.database);
    match demo::run(&config, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
