//! Aggregate statistics over one faculty member's feedback

use crate::entities::{FeedbackRecord, NewReport, Sentiment};

/// Statistics computed over a non-empty feedback set
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStats {
    pub total: i32,
    pub positive: i32,
    pub negative: i32,
    pub neutral: i32,
    pub avg_teaching_quality: f64,
    pub avg_communication_skill: f64,
}

impl ReportStats {
    /// Compute statistics over a feedback set
    ///
    /// Returns `None` for an empty set; there is no meaningful zero-valued report.
    /// Records without a sentiment label are counted as `Neutral`, so
    /// `positive + negative + neutral == total` always holds.
    pub fn compute(records: &[FeedbackRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut teaching_sum: i64 = 0;
        let mut communication_sum: i64 = 0;
        let (mut positive, mut negative, mut neutral) = (0usize, 0usize, 0usize);

        for record in records {
            teaching_sum += i64::from(record.teaching_quality);
            communication_sum += i64::from(record.communication_skill);

            match record.effective_sentiment() {
                Sentiment::Positive => positive += 1,
                Sentiment::Negative => negative += 1,
                Sentiment::Neutral => neutral += 1,
            }
        }

        let len = records.len() as f64;

        Some(Self {
            total: to_count(records.len()),
            positive: to_count(positive),
            negative: to_count(negative),
            neutral: to_count(neutral),
            avg_teaching_quality: teaching_sum as f64 / len,
            avg_communication_skill: communication_sum as f64 / len,
        })
    }

    /// Count for a single sentiment bucket
    pub fn count(&self, sentiment: Sentiment) -> i32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Share of a sentiment bucket in percent (unrounded)
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        f64::from(self.count(sentiment)) * 100.0 / f64::from(self.total)
    }

    /// Build the insertable report for a faculty member
    pub fn into_new_report(self, faculty_name: impl Into<String>) -> NewReport {
        let sentiment_summary = self.summary();
        NewReport {
            faculty_name: faculty_name.into(),
            avg_teaching_quality: self.avg_teaching_quality,
            avg_communication_skill: self.avg_communication_skill,
            total_feedback_count: self.total,
            positive_count: self.positive,
            negative_count: self.negative,
            neutral_count: self.neutral,
            sentiment_summary,
        }
    }
}

fn to_count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
