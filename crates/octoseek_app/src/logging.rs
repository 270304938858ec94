//! Log initialization for octoseek_app.
//!
//! The terminal is owned by the UI, so logs only ever go to a file the
//! user asked for. Without `--log-file` nothing is initialized.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

/// Initialize the file logger when a log path was requested.
///
/// Must run before the terminal enters raw mode so the warning about an
/// unwritable path still reaches stderr cleanly.
pub fn initialize(log_file: Option<&Path>) {
    let Some(path) = log_file else {
        return;
    };

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                path, err
            );
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
