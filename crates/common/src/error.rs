//! Error types shared across airctl crates.

use std::path::PathBuf;

/// Top-level error type for airctl operations.
#[derive(Debug, thiserror::Error)]
pub enum AirctlError {
    #[error("Vision error: {message}")]
    Vision { message: String },

    #[error("Control error: {message}")]
    Control { message: String },

    #[error("Stream error: {message}")]
    Stream { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using AirctlError.
pub type AirctlResult<T> = Result<T, AirctlError>;

impl AirctlError {
    pub fn vision(msg: impl Into<String>) -> Self {
        Self::Vision {
            message: msg.into(),
        }
    }

    pub fn control(msg: impl Into<String>) -> Self {
        Self::Control {
            message: msg.into(),
        }
    }

    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
