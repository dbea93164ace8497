//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Write attempted while the transport is not connected
    #[error("Printer not connected")]
    NotConnected,

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout waiting for the device to accept a write
    #[error("Timeout: {0}")]
    Timeout(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
