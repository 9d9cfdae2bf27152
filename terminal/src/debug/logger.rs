//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation under `config.log_dir`
/// - Non-blocking writes so the UI thread never waits on disk
/// - An optional stderr mirror
/// - A panic hook that records the panic before the default hook runs
///
/// Returns the writer guard; keep it alive until exit so buffered lines are
/// flushed. `None` means the log directory could not be created and file
/// logging is off.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", config.log_dir.display(), e);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(config.log_to_stderr.then(|| fmt::layer().with_writer(std::io::stderr)))
            .init();
        setup_panic_hook();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(config.log_to_stderr.then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();

    tracing::info!(
        log_file = %config.log_path().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
