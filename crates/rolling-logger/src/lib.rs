//! # Rolling Logger
//!
//! Installs a global `tracing` subscriber with a console layer and a daily
//! rolling file layer (`<app>.<YYYY-MM-DD>.log`), keeping the newest
//! `max_files` files. File output goes through a non-blocking worker; keep the
//! returned [`Logger`] alive until shutdown so buffered lines are flushed.
//! Filtering follows `RUST_LOG`, falling back to the configured level.
//!
//! ```no_run
//! let _log = rolling_logger::init_logger("logs", "wedding-server").unwrap();
//! tracing::info!("ready");
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub dir: PathBuf,
    pub app_name: String,
    pub max_files: usize,
    pub console: bool,
    pub level: LevelFilter,
}

impl LoggerConfig {
    pub fn new(dir: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            app_name: app_name.into(),
            max_files: DEFAULT_MAX_FILES,
            console: true,
            level: LevelFilter::INFO,
        }
    }

    #[must_use]
    pub fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    #[must_use]
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.app_name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration(
                "Logger name cannot be empty".to_string(),
            ));
        }
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration(
                "max_files must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Daily appender in `dir`, pruned to `max_files`, behind a background worker.
    fn file_writer(&self) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
        fs::create_dir_all(&self.dir)?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(&self.app_name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(&self.dir)?;

        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Handle to the installed subscriber.
///
/// Dropping it stops the file worker after flushing pending lines.
#[must_use = "Dropping this handle stops file logging"]
#[derive(Debug)]
pub struct Logger {
    dir: PathBuf,
    _guard: WorkerGuard,
}

impl Logger {
    /// Directory the rolling files are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Initialize logging into `dir` with default settings.
pub fn init_logger(dir: impl Into<PathBuf>, app_name: &str) -> Result<Logger, LoggerError> {
    init_with(LoggerConfig::new(dir, app_name))
}

/// Initialize logging from an explicit configuration.
///
/// # Errors
/// Fails on invalid configuration, when the log directory or appender cannot
/// be created, or when a global subscriber is already installed.
pub fn init_with(config: LoggerConfig) -> Result<Logger, LoggerError> {
    config.validate()?;

    let (file_writer, guard) = config.file_writer()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let console_layer = config.console.then(|| layer().compact().with_ansi(true));
    let file_layer = layer().with_writer(file_writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    Ok(Logger {
        dir: config.dir,
        _guard: guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn log_files(dir: &Path, app: &str) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                name.starts_with(&format!("{app}.")) && name.ends_with(".log")
            })
            .collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = LoggerConfig::new("logs", "app");
        assert_eq!(config.max_files, DEFAULT_MAX_FILES);
        assert!(config.console);
        assert_eq!(config.level, LevelFilter::INFO);
    }

    #[test]
    fn test_rejects_zero_max_files() {
        let dir = tempdir().unwrap();
        let result = init_with(LoggerConfig::new(dir.path(), "app").max_files(0));
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_empty_name() {
        let dir = tempdir().unwrap();
        let result = init_with(LoggerConfig::new(dir.path(), "  "));
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_file_writer_creates_dated_file() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");
        let config = LoggerConfig::new(&log_dir, "writer-test");

        let (mut writer, guard) = config.file_writer().unwrap();
        std::io::Write::write_all(&mut writer, b"line\n").unwrap();
        drop(guard);

        let files = log_files(&log_dir, "writer-test");
        assert_eq!(files.len(), 1);

        // writer-test.YYYY-MM-DD.log
        let name = files[0].file_name().unwrap().to_str().unwrap().to_string();
        let date = name.trim_start_matches("writer-test.").trim_end_matches(".log");
        assert_eq!(date.len(), 10);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "line\n");
    }

    #[test]
    fn test_init_writes_to_log_file() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let logger = init_with(LoggerConfig::new(&log_dir, "app").console(false)).unwrap();
        assert_eq!(logger.dir(), log_dir.as_path());
        tracing::info!("hello from the logger test");

        std::thread::sleep(Duration::from_millis(30));
        drop(logger);

        let files = log_files(&log_dir, "app");
        assert_eq!(files.len(), 1);
        let contents = fs::read_to_string(&files[0]).unwrap();
        assert!(contents.contains("hello from the logger test"));
    }
}
