//! Error types for modal-nav-core.

use std::fmt;

/// The error type for core signal and bus operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
    /// The signal has been dropped and is no longer available.
    SignalDropped,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
            Self::SignalDropped => write!(f, "Signal has been dropped"),
        }
    }
}

impl std::error::Error for CoreError {}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
