//! Feedback handlers
//!
//! Endpoints for submitting and listing student feedback.

use axum::{
    extract::{Path, State},
    Json,
};
use feedback_service::{FeedbackRequest, FeedbackResponse, FeedbackService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit feedback
///
/// POST /feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FeedbackRequest>,
) -> ApiResult<Created<Json<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}

/// List all feedback
///
/// GET /feedback
pub async fn list_feedback(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// List feedback for one faculty member
///
/// GET /feedback/faculty/{faculty_name}
pub async fn get_faculty_feedback(
    State(state): State<AppState>,
    Path(faculty_name): Path<String>,
) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    Ok(Json(service.list_for_faculty(&faculty_name).await?))
}

/// List feedback submitted by one student
///
/// GET /feedback/student/{student_name}
pub async fn get_student_feedback(
    State(state): State<AppState>,
    Path(student_name): Path<String>,
) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    Ok(Json(service.list_for_student(&student_name).await?))
}
