use thiserror::Error;

use crate::classifier::FailureKind;

/// Failures that abort extraction for a single URL.
///
/// Missing prices and validation rejections are not errors; they travel
/// as ordinary values inside [`crate::models::PriceCheck`].
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The markup could not be queried (e.g. a selector failed to compile).
    #[error("Document query error: {0}")]
    QueryError(String),

    /// Fetched content was not in the expected shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if this error is transient and worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::NetworkError(_) | AppError::Timeout(_) => true,
            AppError::HttpError(msg) => {
                msg.contains("timeout") || msg.contains("connect") || msg.contains("reset")
            }
            _ => false,
        }
    }

    /// Failure category used to pick a recovery suggestion.
    pub fn category(&self) -> FailureKind {
        match self {
            AppError::NetworkError(_) => FailureKind::Connection,
            AppError::Timeout(_) => FailureKind::Timeout,
            AppError::HttpError(_) => FailureKind::BadResponse,
            AppError::InvalidData(_) | AppError::SerializationError(_) => FailureKind::InvalidData,
            AppError::QueryError(_) => FailureKind::StructureMismatch,
            AppError::ConfigError(_) | AppError::Generic(_) => FailureKind::Unknown,
        }
    }
}
