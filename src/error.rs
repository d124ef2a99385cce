//! # Error Types
//!
//! Custom error types for SBUS Bridge using `thiserror`.
//!
//! Invalid axis values are never errors (they are clamped during
//! calibration), and lifecycle misuse such as a double `start` or `stop`
//! is a no-op. What remains is transport and configuration failure.

use thiserror::Error;

/// Main error type for SBUS Bridge
#[derive(Debug, Error)]
pub enum SbusBridgeError {
    /// Serial transport errors (open or per-frame write failures)
    #[error("serial transport error: {0}")]
    Serial(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transmitter task failed to shut down cleanly
    #[error("transmitter task error: {0}")]
    Task(String),
}

/// Result type alias for SBUS Bridge
pub type Result<T> = std::result::Result<T, SbusBridgeError>;
