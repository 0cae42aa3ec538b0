//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("No feedback found for this faculty")]
    NoFeedbackForFaculty(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{field} must be between 1 and 5")]
    InvalidRating { field: &'static str },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Sentiment classifier error: {0}")]
    ClassifierError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoFeedbackForFaculty(_) => "NO_FEEDBACK",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidRating { .. } => "INVALID_RATING",
            Self::DatabaseError(_) => "STORE_UNAVAILABLE",
            Self::ClassifierError(_) => "CLASSIFIER_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoFeedbackForFaculty(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidRating { .. })
    }
}
