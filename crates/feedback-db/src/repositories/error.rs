//! Error handling utilities for repositories

use feedback_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Every driver failure surfaces as a store error; callers never see raw SQL.
pub fn map_db_error(e: SqlxError) -> DomainError {
    tracing::error!(error = %e, "Database operation failed");
    DomainError::DatabaseError(e.to_string())
}
