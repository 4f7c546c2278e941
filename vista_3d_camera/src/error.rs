//! Error types for the Vista3D camera library
//!
//! This module defines the errors returned by orientation-setting
//! operations. All other camera operations are pure in-memory arithmetic
//! and cannot fail.

use std::fmt;

/// Result type for Vista3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Vista3D camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A supplied quaternion has near-zero magnitude and cannot be
    /// normalized into a valid orientation
    InvalidOrientation(String),

    /// A supplied rotation axis has near-zero length
    InvalidAxis(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOrientation(msg) => write!(f, "Invalid orientation: {}", msg),
            Error::InvalidAxis(msg) => write!(f, "Invalid rotation axis: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
