//! Logging setup for claudernetes
//!
//! Stdout carries the manifest, so every layer writes elsewhere.

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default console filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Create log file with proper options
pub fn create_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// Install the stderr layer and, when given, a debug-level file layer.
pub fn init(log_file: Option<File>) {
    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_filter(EnvFilter::new("debug"))
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
                ),
        )
        .with(file_layer)
        .init();
}
