//! Report service
//!
//! Generates faculty performance reports from stored feedback and serves the
//! report history.

use feedback_core::{DomainError, ReportStats};
use tracing::{info, instrument};

use crate::dto::{GenerateReportRequest, GenerateReportResponse, ReportResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate and persist a report for one faculty member
    ///
    /// The name is matched exactly; it is only checked for blankness, never
    /// trimmed. Each successful call writes one new report, even when an
    /// identical report already exists.
    #[instrument(skip(self))]
    pub async fn generate_report(&self, faculty_name: &str) -> ServiceResult<ReportResponse> {
        if faculty_name.trim().is_empty() {
            return Err(DomainError::ValidationError("Faculty name is required".to_string()).into());
        }

        let records = self.ctx.feedback_repo().find_by_faculty(faculty_name).await?;

        let stats = ReportStats::compute(&records)
            .ok_or_else(|| DomainError::NoFeedbackForFaculty(faculty_name.to_string()))?;

        let report = self
            .ctx
            .report_repo()
            .insert(&stats.into_new_report(faculty_name))
            .await?;

        info!(
            report_id = %report.id,
            faculty = %report.faculty_name,
            feedback_count = report.total_feedback_count,
            "Report generated"
        );

        Ok(ReportResponse::from(&report))
    }

    /// Handle a generate request, wrapping the result in the response envelope
    pub async fn generate(&self, request: GenerateReportRequest) -> ServiceResult<GenerateReportResponse> {
        let report = self.generate_report(&request.faculty_name).await?;
        Ok(GenerateReportResponse { report })
    }

    /// List every report, newest first
    #[instrument(skip(self))]
    pub async fn list_reports(&self) -> ServiceResult<Vec<ReportResponse>> {
        let reports = self.ctx.report_repo().find_all().await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    /// List the report history of one faculty member, newest first
    #[instrument(skip(self))]
    pub async fn reports_for_faculty(&self, faculty_name: &str) -> ServiceResult<Vec<ReportResponse>> {
        let reports = self.ctx.report_repo().find_by_faculty(faculty_name).await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }
}
