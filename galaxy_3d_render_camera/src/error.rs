//! Error types for the Galaxy3D render camera
//!
//! Degenerate camera inputs never produce errors (they are recovered
//! locally). Errors only come from the render engine adapter or from
//! using the camera context out of order.

use std::fmt;

/// Result type for render camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Render camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Error reported by the render engine adapter
    BackendError(String),

    /// Handle unknown to the render engine (deleted or never created)
    InvalidHandle(String),

    /// The renderer-side camera does not exist yet (`begin` not called)
    NotInitialized(String),

    /// The renderer-side camera was already created
    AlreadyInitialized(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidHandle(msg) => write!(f, "Invalid handle: {}", msg),
            Error::NotInitialized(msg) => write!(f, "Not initialized: {}", msg),
            Error::AlreadyInitialized(msg) => write!(f, "Already initialized: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
