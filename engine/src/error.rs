//! Error types for the Revolve engine.

use thiserror::Error;

/// All possible errors from the Revolve engine.
///
/// Only configuration is fallible. Runtime input (out-of-range indices,
/// NaN progress, stale timer handles, redundant calls) is normalized or
/// ignored, never raised as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Configuration errors
    #[error("carousel needs at least one slide")]
    NoSlides,

    #[error("transition duration must be positive")]
    ZeroTransitionDuration,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
