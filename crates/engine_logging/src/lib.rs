#![deny(missing_docs)]
//! Shared logging utilities for the engine workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Log lines are
//! prefixed with the pipeline stage currently executing on the thread.

use std::cell::Cell;

thread_local! {
    /// Thread-local label for the pipeline stage currently executing.
    static ACTIVE_STAGE: Cell<&'static str> = const { Cell::new("idle") };
}

/// Sets the pipeline-stage label for the current thread.
/// The conversion pipeline should call this before running each stage.
pub fn set_active_stage(stage: &'static str) {
    ACTIVE_STAGE.with(|v| v.set(stage));
}

/// Retrieves the pipeline-stage label for the current thread.
/// Returns "idle" outside of a conversion call.
pub fn active_stage() -> &'static str {
    ACTIVE_STAGE.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the active stage.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("[{}] {}", $crate::active_stage(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the active stage.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("[{}] {}", $crate::active_stage(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the active stage.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("[{}] {}", $crate::active_stage(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the active stage.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("[{}] {}", $crate::active_stage(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the active stage.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("[{}] {}", $crate::active_stage(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
