//! Error types for cedash
//!
//! This module defines the error types used throughout the cedash library.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.

use thiserror::Error;

/// Main error type for cedash operations
///
/// This enum encompasses all possible errors that can occur while fetching,
/// normalizing and forecasting cost data.
#[derive(Error, Debug)]
pub enum CedashError {
    /// Raw Cost Explorer response did not match the expected shape
    #[error("Malformed cost response: {0}")]
    MalformedResponse(String),

    /// The Cost Explorer API call failed (transport or auth)
    #[error("Cost retrieval failed: {0}")]
    Retrieval(String),

    /// Not enough data to compute a forecast
    #[error("Insufficient data to compute a forecast")]
    InsufficientData,

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in cedash
pub type Result<T> = std::result::Result<T, CedashError>;
