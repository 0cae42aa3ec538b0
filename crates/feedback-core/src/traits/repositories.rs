//! Repository traits (ports) - define the interface for data access
//!
//! The report generator depends only on these traits; the infrastructure layer
//! provides PostgreSQL and in-memory implementations.

use async_trait::async_trait;

use crate::entities::{FeedbackRecord, NewFeedback, NewReport, Report};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// List every record whose faculty name equals `faculty_name` exactly
    ///
    /// No pagination: the whole matching set is returned.
    async fn find_by_faculty(&self, faculty_name: &str) -> RepoResult<Vec<FeedbackRecord>>;

    /// List all feedback, newest first
    async fn find_all(&self) -> RepoResult<Vec<FeedbackRecord>>;

    /// List feedback by a student, matching the name case-insensitively
    async fn find_by_student(&self, student_name: &str) -> RepoResult<Vec<FeedbackRecord>>;

    /// Insert a feedback record; the store assigns id and timestamp
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<FeedbackRecord>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Insert a report in one atomic write and return it with its assigned id
    /// and creation timestamp
    async fn insert(&self, report: &NewReport) -> RepoResult<Report>;

    /// List all reports, newest first
    async fn find_all(&self) -> RepoResult<Vec<Report>>;

    /// List reports for one faculty name (exact match), newest first
    async fn find_by_faculty(&self, faculty_name: &str) -> RepoResult<Vec<Report>>;
}
