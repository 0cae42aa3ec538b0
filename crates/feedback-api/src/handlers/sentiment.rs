//! Sentiment handler

use axum::{extract::State, Json};
use feedback_service::{SentimentRequest, SentimentResponse, SentimentService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Classify a comment without storing it
///
/// POST /sentiment/analyze
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SentimentRequest>,
) -> ApiResult<Json<SentimentResponse>> {
    let service = SentimentService::new(state.service_context());
    Ok(Json(service.analyze(request).await?))
}
