//! Route definitions
//!
//! API routes are mounted under /api/v1; health routes live at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{feedback, health, reports, sentiment};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(report_routes())
        .merge(feedback_routes())
        .merge(sentiment_routes())
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(reports::list_reports))
        .route("/reports/generate", post(reports::generate_report))
        .route(
            "/reports/faculty/:faculty_name",
            get(reports::get_faculty_reports),
        )
}

/// Feedback routes
fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/feedback",
            get(feedback::list_feedback).post(feedback::submit_feedback),
        )
        .route(
            "/feedback/faculty/:faculty_name",
            get(feedback::get_faculty_feedback),
        )
        .route(
            "/feedback/student/:student_name",
            get(feedback::get_student_feedback),
        )
}

/// Sentiment routes
fn sentiment_routes() -> Router<AppState> {
    Router::new().route("/sentiment/analyze", post(sentiment::analyze_sentiment))
}
