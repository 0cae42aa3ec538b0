//! Feedback entity <-> model mapper

use feedback_core::entities::{FeedbackRecord, NewFeedback, Sentiment};
use feedback_core::value_objects::FeedbackId;

use crate::models::FeedbackModel;

/// Read a stored sentiment label
///
/// Unknown labels are dropped with a warning; report generation then counts
/// the record as neutral.
pub fn parse_sentiment(raw: Option<&str>) -> Option<Sentiment> {
    let raw = raw?;
    match raw.parse() {
        Ok(sentiment) => Some(sentiment),
        Err(e) => {
            tracing::warn!(label = raw, error = %e, "Ignoring stored sentiment label");
            None
        }
    }
}

/// Convert FeedbackModel to FeedbackRecord entity
impl From<FeedbackModel> for FeedbackRecord {
    fn from(model: FeedbackModel) -> Self {
        let sentiment = parse_sentiment(model.sentiment.as_deref());
        FeedbackRecord {
            id: FeedbackId::new(model.id),
            faculty_name: model.faculty_name,
            student_name: model.student_name,
            teaching_quality: model.teaching_quality,
            communication_skill: model.communication_skill,
            comment: model.comment,
            sentiment,
            created_at: model.created_at,
        }
    }
}

/// Convert NewFeedback reference to values for database insertion
pub struct FeedbackInsert<'a> {
    pub faculty_name: &'a str,
    pub student_name: &'a str,
    pub teaching_quality: i32,
    pub communication_skill: i32,
    pub comment: Option<&'a str>,
    pub sentiment: Option<&'static str>,
}

impl<'a> FeedbackInsert<'a> {
    pub fn new(feedback: &'a NewFeedback) -> Self {
        Self {
            faculty_name: &feedback.faculty_name,
            student_name: &feedback.student_name,
            teaching_quality: feedback.teaching_quality,
            communication_skill: feedback.communication_skill,
            comment: feedback.comment.as_deref(),
            sentiment: feedback.sentiment.map(Sentiment::as_str),
        }
    }
}
