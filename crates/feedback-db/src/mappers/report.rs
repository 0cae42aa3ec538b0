//! Report entity <-> model mapper

use feedback_core::entities::{NewReport, Report};
use feedback_core::value_objects::ReportId;

use crate::models::ReportModel;

/// Convert ReportModel to Report entity
impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: ReportId::new(model.id),
            faculty_name: model.faculty_name,
            avg_teaching_quality: model.avg_teaching_quality,
            avg_communication_skill: model.avg_communication_skill,
            total_feedback_count: model.total_feedback_count,
            positive_count: model.positive_count,
            negative_count: model.negative_count,
            neutral_count: model.neutral_count,
            sentiment_summary: model.sentiment_summary,
            created_at: model.created_at,
        }
    }
}

/// Convert NewReport reference to values for database insertion
pub struct ReportInsert<'a> {
    pub faculty_name: &'a str,
    pub avg_teaching_quality: f64,
    pub avg_communication_skill: f64,
    pub sentiment_summary: &'a str,
    pub total_feedback_count: i32,
    pub positive_count: i32,
    pub negative_count: i32,
    pub neutral_count: i32,
}

impl<'a> ReportInsert<'a> {
    pub fn new(report: &'a NewReport) -> Self {
        Self {
            faculty_name: &report.faculty_name,
            avg_teaching_quality: report.avg_teaching_quality,
            avg_communication_skill: report.avg_communication_skill,
            sentiment_summary: &report.sentiment_summary,
            total_feedback_count: report.total_feedback_count,
            positive_count: report.positive_count,
            negative_count: report.negative_count,
            neutral_count: report.neutral_count,
        }
    }
}
