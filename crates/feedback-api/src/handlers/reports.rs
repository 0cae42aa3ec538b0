//! Report handlers
//!
//! Endpoints for generating reports and reading report history.

use axum::{
    extract::{Path, State},
    Json,
};
use feedback_service::{
    GenerateReportRequest, GenerateReportResponse, ReportResponse, ReportService,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Generate a report for one faculty member
///
/// POST /reports/generate
pub async fn generate_report(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateReportRequest>,
) -> ApiResult<Json<GenerateReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.generate(request).await?;
    Ok(Json(response))
}

/// List all reports, newest first
///
/// GET /reports
pub async fn list_reports(State(state): State<AppState>) -> ApiResult<Json<Vec<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.list_reports().await?))
}

/// List reports for one faculty member, newest first
///
/// GET /reports/faculty/{faculty_name}
pub async fn get_faculty_reports(
    State(state): State<AppState>,
    Path(faculty_name): Path<String>,
) -> ApiResult<Json<Vec<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.reports_for_faculty(&faculty_name).await?))
}
