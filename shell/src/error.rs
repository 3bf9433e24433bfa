//! Error types for the host shell.

use revolve_engine::Timestamp;
use thiserror::Error;

/// Errors from host-side drivers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The host fed the driver a clock value older than one it already saw.
    #[error("time went backwards: now {now} < last {last}")]
    TimeWentBackwards { last: Timestamp, now: Timestamp },
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
