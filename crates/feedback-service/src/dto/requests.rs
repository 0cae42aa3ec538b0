//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Report Requests
// ============================================================================

/// Report generation request
///
/// A missing `facultyName` deserializes as empty and is rejected by validation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Faculty name is required"))]
    pub faculty_name: String,
}

// ============================================================================
// Feedback Requests
// ============================================================================

/// Feedback submission request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Faculty name is required"))]
    pub faculty_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Student name is required"))]
    pub student_name: String,

    #[validate(range(min = 1, max = 5, message = "Teaching quality must be between 1 and 5"))]
    pub teaching_quality: i32,

    #[validate(range(min = 1, max = 5, message = "Communication skill must be between 1 and 5"))]
    pub communication_skill: i32,

    #[validate(length(max = 5000, message = "Comment must be at most 5000 characters"))]
    pub comment: Option<String>,
}

// ============================================================================
// Sentiment Requests
// ============================================================================

/// Ad-hoc sentiment analysis request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SentimentRequest {
    #[serde(default)]
    #[validate(length(max = 5000, message = "Comment must be at most 5000 characters"))]
    pub comment: String,
}
