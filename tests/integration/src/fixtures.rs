//! Test fixtures and data generators
//!
//! Request and response shapes as seen by an HTTP client.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Faculty name no other test uses
pub fn unique_faculty() -> String {
    format!("Dr. Test {}-{}", std::process::id(), unique_suffix())
}

/// Feedback submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub faculty_name: String,
    pub student_name: String,
    pub teaching_quality: i32,
    pub communication_skill: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FeedbackRequest {
    pub fn new(faculty: &str, teaching_quality: i32, communication_skill: i32, comment: &str) -> Self {
        Self {
            faculty_name: faculty.to_string(),
            student_name: format!("student{}", unique_suffix()),
            teaching_quality,
            communication_skill,
            comment: Some(comment.to_string()),
        }
    }

    pub fn by_student(mut self, student: &str) -> Self {
        self.student_name = student.to_string();
        self
    }
}

/// Report generation request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub faculty_name: String,
}

impl GenerateReportRequest {
    pub fn new(faculty: &str) -> Self {
        Self {
            faculty_name: faculty.to_string(),
        }
    }
}

/// Stored feedback
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: i64,
    pub faculty_name: String,
    pub student_name: String,
    pub teaching_quality: i32,
    pub communication_skill: i32,
    pub comment: Option<String>,
    pub sentiment: String,
    pub created_at: String,
}

/// Persisted report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: i64,
    pub faculty_name: String,
    pub avg_teaching_quality: f64,
    pub avg_communication_skill: f64,
    pub total_feedback_count: i32,
    pub positive_count: i32,
    pub negative_count: i32,
    pub neutral_count: i32,
    pub sentiment_summary: String,
    pub created_at: String,
}

/// Report generation envelope
#[derive(Debug, Deserialize)]
pub struct GenerateReportResponse {
    pub report: ReportResponse,
}

/// Sentiment analysis result
#[derive(Debug, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
