//! Error types for cardshell core services.

use std::fmt;

/// The error type for core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The worker pool could not be built.
    ThreadPoolCreation(String),
    /// The receiving side of a UI channel has been dropped.
    ChannelClosed,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPoolCreation(msg) => write!(f, "Failed to create thread pool: {msg}"),
            Self::ChannelClosed => write!(f, "UI channel receiver has been dropped"),
        }
    }
}

impl std::error::Error for CoreError {}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
