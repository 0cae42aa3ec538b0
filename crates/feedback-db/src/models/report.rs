//! Report database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub faculty_name: String,
    pub avg_teaching_quality: f64,
    pub avg_communication_skill: f64,
    pub sentiment_summary: String,
    pub total_feedback_count: i32,
    pub positive_count: i32,
    pub negative_count: i32,
    pub neutral_count: i32,
    pub created_at: DateTime<Utc>,
}
