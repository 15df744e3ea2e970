//! Custom error types for Globetrotter
//!
//! The planning core (calendar bucketing, itinerary totals) is total and never
//! fails. Errors only arise at the edges: configuration, dataset loading,
//! form input parsing, authentication and lookups.

use thiserror::Error;

/// The main error type for Globetrotter operations
#[derive(Error, Debug)]
pub enum GlobeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-entered data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login or registration was rejected
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The session is not allowed to perform the operation
    #[error("Access denied: {0}")]
    Forbidden(String),
}

impl GlobeError {
    /// Create a "not found" error for trips
    pub fn trip_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Trip",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for itinerary sections
    pub fn section_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Section",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for GlobeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GlobeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Globetrotter operations
pub type GlobeResult<T> = Result<T, GlobeError>;
