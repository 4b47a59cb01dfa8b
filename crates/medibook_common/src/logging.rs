//! Logging utilities for the MediBook application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the MediBook application.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
///
/// This function should be called once at the start of the application.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Messages are formatted with timestamps, log levels, targets, and file/line
/// information. `RUST_LOG` directives still take precedence over `level`.
pub fn init_with_level(level: Level) {
    let filter = match format!("medibook={}", level).parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    // Use try_init to handle the case where a global default subscriber has
    // already been set (e.g. in tests).
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
