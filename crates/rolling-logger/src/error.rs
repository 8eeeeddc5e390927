use std::io;

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log directory could not be created.
    #[error("Log directory error: {0}")]
    Io(#[from] io::Error),

    /// The rolling file appender could not be built.
    #[error("Log file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// Invalid configuration supplied to the logger.
    #[error("Invalid logger configuration: {0}")]
    InvalidConfiguration(String),

    /// A global tracing subscriber has already been installed.
    #[error("Tracing subscriber error: {0}")]
    Init(String),
}
