//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_opt;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "tokenscope=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`; the appender adds the date
    pub log_file_name: String,
    /// Log level filter (e.g., "tokenscope=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "tokenscope.log".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: get_env_opt("TOKENSCOPE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: get_env_opt("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: get_env_opt("TOKENSCOPE_LOG_STDERR")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.log_to_stderr),
            ..defaults
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }

    /// Path of today's log file prefix, for the startup message
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DebugConfig::default();
        assert_eq!(config.log_path(), PathBuf::from("logs/tokenscope.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_debug_detection() {
        let config = DebugConfig {
            log_level: "tokenscope=debug,warn".to_string(),
            ..DebugConfig::default()
        };
        assert!(config.is_debug_enabled());
    }
}
