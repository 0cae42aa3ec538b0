//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use feedback_core::entities::{FeedbackRecord, Report};

use super::responses::{FeedbackResponse, ReportResponse};

// ============================================================================
// Report Mappers
// ============================================================================

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            faculty_name: report.faculty_name.clone(),
            avg_teaching_quality: report.avg_teaching_quality,
            avg_communication_skill: report.avg_communication_skill,
            total_feedback_count: report.total_feedback_count,
            positive_count: report.positive_count,
            negative_count: report.negative_count,
            neutral_count: report.neutral_count,
            sentiment_summary: report.sentiment_summary.clone(),
            created_at: report.created_at,
        }
    }
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self::from(&report)
    }
}

// ============================================================================
// Feedback Mappers
// ============================================================================

impl From<&FeedbackRecord> for FeedbackResponse {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            id: record.id,
            faculty_name: record.faculty_name.clone(),
            student_name: record.student_name.clone(),
            teaching_quality: record.teaching_quality,
            communication_skill: record.communication_skill,
            comment: record.comment.clone(),
            sentiment: record.effective_sentiment(),
            created_at: record.created_at,
        }
    }
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(record: FeedbackRecord) -> Self {
        Self::from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use feedback_core::entities::Sentiment;
    use feedback_core::value_objects::FeedbackId;

    #[test]
    fn test_unlabeled_feedback_displays_neutral() {
        let record = FeedbackRecord {
            id: FeedbackId::new(3),
            faculty_name: "Dr. Smith".to_string(),
            student_name: "Alice".to_string(),
            teaching_quality: 3,
            communication_skill: 3,
            comment: Some("ok".to_string()),
            sentiment: None,
            created_at: Utc::now(),
        };

        let response = FeedbackResponse::from(&record);
        assert_eq!(response.sentiment, Sentiment::Neutral);
        assert_eq!(response.id, record.id);
    }
}
