//! Report entity - immutable aggregate snapshot of one faculty member's feedback

use chrono::{DateTime, Utc};

use crate::value_objects::ReportId;

/// Persisted report
///
/// Reports are never updated or deleted; a new report is generated to reflect
/// newer feedback and callers order by `created_at` to find the latest one.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
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

impl Report {
    /// Check the sentiment count invariant
    #[inline]
    pub fn counts_are_consistent(&self) -> bool {
        self.positive_count + self.negative_count + self.neutral_count == self.total_feedback_count
    }
}

/// Computed report fields, not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub faculty_name: String,
    pub avg_teaching_quality: f64,
    pub avg_communication_skill: f64,
    pub total_feedback_count: i32,
    pub positive_count: i32,
    pub negative_count: i32,
    pub neutral_count: i32,
    pub sentiment_summary: String,
}

impl NewReport {
    /// Materialize a persisted report from these fields
    pub fn into_report(self, id: ReportId, created_at: DateTime<Utc>) -> Report {
        Report {
            id,
            faculty_name: self.faculty_name,
            avg_teaching_quality: self.avg_teaching_quality,
            avg_communication_skill: self.avg_communication_skill,
            total_feedback_count: self.total_feedback_count,
            positive_count: self.positive_count,
            negative_count: self.negative_count,
            neutral_count: self.neutral_count,
            sentiment_summary: self.sentiment_summary,
            created_at,
        }
    }
}
