use crate::Result;
use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;

const ROTATE_AFTER_BYTES: u64 = 10 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Fallback level when `RUST_LOG` is unset, e.g. `"info"` or `"merge2048=debug"`.
    pub level: String,
    /// Rotating log files go here; stderr when `None`.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// Start the global logger. Keep the returned handle alive for the lifetime
/// of the program, dropping it flushes and stops file output.
pub fn setup_logging(config: &LoggingConfig) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(&config.level)?;

    let logger = match &config.directory {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(ROTATE_AFTER_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEPT_LOG_FILES),
            ),
        None => logger
            .log_to_stderr()
            .format(flexi_logger::colored_default_format),
    };

    Ok(logger.start()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_logs_info_to_stderr() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.directory.is_none());
    }
}
