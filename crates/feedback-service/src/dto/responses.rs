//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.
//! Record ids are serialized as JSON numbers.

use chrono::{DateTime, Utc};
use feedback_core::entities::Sentiment;
use feedback_core::value_objects::{FeedbackId, ReportId};
use serde::Serialize;

// ============================================================================
// Report Responses
// ============================================================================

/// Persisted report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: ReportId,
    pub faculty_name: String,
    pub avg_teaching_quality: f64,
    pub avg_communication_skill: f64,
    pub total_feedback_count: i32,
    pub positive_count: i32,
    pub negative_count: i32,
    pub neutral_count: i32,
    pub sentiment_summary: String,
    pub created_at: DateTime<Utc>,
}

/// Envelope returned by report generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReportResponse {
    pub report: ReportResponse,
}

// ============================================================================
// Feedback Responses
// ============================================================================

/// Stored feedback
///
/// `sentiment` is always present; unlabeled records display as Neutral.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: FeedbackId,
    pub faculty_name: String,
    pub student_name: String,
    pub teaching_quality: i32,
    pub communication_skill: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Sentiment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
