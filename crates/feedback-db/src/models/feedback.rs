//! Feedback database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for feedback table
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackModel {
    pub id: i64,
    pub faculty_name: String,
    pub student_name: String,
    pub teaching_quality: i32,
    pub communication_skill: i32,
    pub comment: Option<String>,
    /// Free text; older rows may carry a label this build does not know
    pub sentiment: Option<String>,
    pub created_at: DateTime<Utc>,
}
