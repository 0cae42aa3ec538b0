//! Feedback entity - one student's rating of one faculty member

use chrono::{DateTime, Utc};

use super::sentiment::Sentiment;
use crate::value_objects::FeedbackId;

/// Lowest accepted rating
pub const RATING_MIN: i32 = 1;
/// Highest accepted rating
pub const RATING_MAX: i32 = 5;

/// Stored feedback record
///
/// `faculty_name` is free text and is the only link to the rated person; it is
/// compared with exact, case-sensitive equality when reports are generated.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub id: FeedbackId,
    pub faculty_name: String,
    pub student_name: String,
    pub teaching_quality: i32,
    pub communication_skill: i32,
    pub comment: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Sentiment used for counting and display
    #[inline]
    pub fn effective_sentiment(&self) -> Sentiment {
        Sentiment::resolve(self.sentiment)
    }

    /// Check if this record belongs to the given faculty (exact match)
    #[inline]
    pub fn is_for_faculty(&self, faculty_name: &str) -> bool {
        self.faculty_name == faculty_name
    }

    /// Check if this record was submitted by the given student (case-insensitive)
    pub fn is_by_student(&self, student_name: &str) -> bool {
        self.student_name.to_lowercase() == student_name.to_lowercase()
    }
}

/// Feedback fields ready to be inserted; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub faculty_name: String,
    pub student_name: String,
    pub teaching_quality: i32,
    pub communication_skill: i32,
    pub comment: Option<String>,
    pub sentiment: Option<Sentiment>,
}

impl NewFeedback {
    /// Check that a rating lies in the accepted range
    #[inline]
    pub fn is_valid_rating(rating: i32) -> bool {
        (RATING_MIN..=RATING_MAX).contains(&rating)
    }

    /// Comment with surrounding whitespace removed, if anything is left
    pub fn meaningful_comment(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Materialize a stored record from these fields
    pub fn into_record(self, id: FeedbackId, created_at: DateTime<Utc>) -> FeedbackRecord {
        FeedbackRecord {
            id,
            faculty_name: self.faculty_name,
            student_name: self.student_name,
            teaching_quality: self.teaching_quality,
            communication_skill: self.communication_skill,
            comment: self.comment,
            sentiment: self.sentiment,
            created_at,
        }
    }
}
