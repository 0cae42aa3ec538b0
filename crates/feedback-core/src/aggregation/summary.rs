//! Human-readable sentiment summary
//!
//! The summary is rendered once at generation time and stored with the report.
//! Changing the template here does not alter reports that already exist.

use super::stats::ReportStats;
use crate::entities::Sentiment;

/// Format a number with a fixed count of decimal places
///
/// Ties round away from zero (`6.25` → `"6.3"`).
pub fn format_fixed(value: f64, places: usize) -> String {
    let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.places$}")
}

impl ReportStats {
    /// Render the stored sentiment summary sentence
    pub fn summary(&self) -> String {
        format!(
            "Based on {} feedback submissions: {}% Positive, {}% Negative, {}% Neutral. \
             Overall teaching quality: {}/5, Communication skill: {}/5.",
            self.total,
            format_fixed(self.percentage(Sentiment::Positive), 1),
            format_fixed(self.percentage(Sentiment::Negative), 1),
            format_fixed(self.percentage(Sentiment::Neutral), 1),
            format_fixed(self.avg_teaching_quality, 2),
            format_fixed(self.avg_communication_skill, 2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(positive: i32, negative: i32, neutral: i32, teaching: f64, communication: f64) -> ReportStats {
        ReportStats {
            total: positive + negative + neutral,
            positive,
            negative,
            neutral,
            avg_teaching_quality: teaching,
            avg_communication_skill: communication,
        }
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(100.0 / 3.0, 1), "33.3");
        assert_eq!(format_fixed(100.0, 1), "100.0");
        assert_eq!(format_fixed(0.0, 1), "0.0");
        assert_eq!(format_fixed(3.0, 2), "3.00");
        assert_eq!(format_fixed(200.0 / 3.0, 1), "66.7");
    }

    #[test]
    fn test_format_fixed_ties_round_up() {
        assert_eq!(format_fixed(6.25, 1), "6.3");
        assert_eq!(format_fixed(2.125, 2), "2.13");
    }

    #[test]
    fn test_format_fixed_scales_before_rounding() {
        // 43 / 40 is stored just below 1.075; scaling lands on the tie and it rounds up
        assert_eq!(format_fixed(43.0 / 40.0, 2), "1.08");
    }

    #[test]
    fn test_summary_three_way_split() {
        assert_eq!(
            stats(1, 1, 1, 3.0, 3.0).summary(),
            "Based on 3 feedback submissions: 33.3% Positive, 33.3% Negative, 33.3% Neutral. \
             Overall teaching quality: 3.00/5, Communication skill: 3.00/5."
        );
    }

    #[test]
    fn test_summary_single_positive() {
        assert_eq!(
            stats(1, 0, 0, 5.0, 5.0).summary(),
            "Based on 1 feedback submissions: 100.0% Positive, 0.0% Negative, 0.0% Neutral. \
             Overall teaching quality: 5.00/5, Communication skill: 5.00/5."
        );
    }

    #[test]
    fn test_summary_averages_two_decimals() {
        let summary = stats(2, 1, 0, 11.0 / 3.0, 4.5).summary();
        assert!(summary.contains("66.7% Positive, 33.3% Negative, 0.0% Neutral"));
        assert!(summary.contains("Overall teaching quality: 3.67/5, Communication skill: 4.50/5."));
    }
}
