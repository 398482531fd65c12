use std::io;

/// Failures inside the logger itself.
///
/// These never reach callers of the logging methods. They are reported on the
/// fallback channel and the affected record is lost.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to serialize log entry: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("Failed to write log entry: {0}")]
    Write(#[source] io::Error),
    #[error("Failed to write newline after log entry: {0}")]
    Newline(#[source] io::Error),
    #[error("Failed to flush log output: {0}")]
    Flush(#[source] io::Error),
}
