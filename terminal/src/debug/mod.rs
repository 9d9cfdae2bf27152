//! # Logging Infrastructure
//!
//! File-based structured logging for the client.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/tokenscope.log.YYYY-MM-DD` (daily rotation)
//! - **Env filter**: `RUST_LOG` directives, default `tokenscope=info,warn`
//! - **Panic capture**: panics are logged with their location
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `tokenscope=debug,info`)
//! - `TOKENSCOPE_LOG_DIR`: Log directory (default: `logs`)
//! - `TOKENSCOPE_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment
///
/// Call at startup, before any other operations, and hold the returned
/// guard for the lifetime of the process.
///
/// # Example
///
/// ```rust,no_run
/// let _log_guard = tokenscope::debug::init();
/// ```
pub fn init() -> Option<WorkerGuard> {
    logger::init(&DebugConfig::from_env())
}
