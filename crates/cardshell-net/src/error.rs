//! Error types for image fetching.

use std::fmt;

/// Image fetch errors.
///
/// Cloneable so one failure can be handed to every observer of a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The key does not start with a known prefix.
    UnknownPrefix(String),
    /// The card database has no printing for the key.
    CardNotFound(String),
    /// Neither a collector number nor a fallback URL is known for the card.
    NoImageUrl(String),
    /// The token index has no entry for the file name.
    TokenNotFound {
        /// Looked-up file name, e.g. `b_1_1_goblin.jpg`.
        name: String,
        /// Index file that was searched.
        index: String,
    },
    /// Invalid URL.
    InvalidUrl(String),
    /// HTTP request failed.
    Request(String),
    /// Request timed out.
    Timeout,
    /// Connection refused or failed.
    Connection(String),
    /// HTTP error status (4xx or 5xx).
    HttpStatus {
        /// The HTTP status code.
        status: u16,
    },
    /// The downloaded bytes are not a decodable image.
    Decode(String),
    /// I/O error while writing the cache file.
    Io(String),
    /// Worker results could not be delivered.
    Channel(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPrefix(key) => write!(f, "Cannot fetch image for: {key}"),
            Self::CardNotFound(key) => write!(f, "Paper card not found for: {key}"),
            Self::NoImageUrl(key) => write!(f, "No download location known for: {key}"),
            Self::TokenNotFound { name, index } => {
                write!(f, "Token {name} not found in: {index}")
            }
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            Self::Request(msg) => write!(f, "HTTP request error: {msg}"),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Connection(msg) => write!(f, "Connection error: {msg}"),
            Self::HttpStatus { status } => write!(f, "HTTP {status}"),
            Self::Decode(msg) => write!(f, "Image decode error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Channel(msg) => write!(f, "Channel error: {msg}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for ImageError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Self::Io(io.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<cardshell_core::CoreError> for ImageError {
    fn from(err: cardshell_core::CoreError) -> Self {
        Self::Channel(err.to_string())
    }
}

/// A specialized Result type for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ImageError::UnknownPrefix("x:foo".into()).to_string(),
            "Cannot fetch image for: x:foo"
        );
        assert_eq!(
            ImageError::TokenNotFound {
                name: "goblin.jpg".into(),
                index: "tokens.txt".into()
            }
            .to_string(),
            "Token goblin.jpg not found in: tokens.txt"
        );
        assert_eq!(ImageError::HttpStatus { status: 404 }.to_string(), "HTTP 404");
    }

    #[test]
    fn test_from_url_error() {
        let err: ImageError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ImageError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_io_error() {
        let err: ImageError = std::io::Error::other("disk full").into();
        assert_eq!(err, ImageError::Io("disk full".into()));
    }
}
