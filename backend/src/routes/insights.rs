//! Insight routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::InsightsService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use nomadic_performance_shared::types::{
    CorrelationResponse, HabitPatternResponse, InsightResponse,
};
use uuid::Uuid;

/// Create insight routes
pub fn insight_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_current))
        .route("/generate", post(generate_weekly))
        .route("/:id/read", put(mark_read))
        .route("/patterns", get(get_patterns))
        .route("/correlations", get(get_correlations))
}

/// GET /api/v1/insights
async fn get_current(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<InsightResponse>>> {
    let insights = InsightsService::get_current(state.db(), auth.user_id).await?;
    Ok(Json(insights))
}

/// POST /api/v1/insights/generate
async fn generate_weekly(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<InsightResponse>>> {
    let insights = InsightsService::generate_weekly(state.db(), auth.user_id).await?;
    Ok(Json(insights))
}

/// PUT /api/v1/insights/:id/read
async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    InsightsService::mark_read(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/insights/patterns
async fn get_patterns(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<HabitPatternResponse>>> {
    let patterns = InsightsService::get_habit_patterns(state.db(), auth.user_id).await?;
    Ok(Json(patterns))
}

/// GET /api/v1/insights/correlations
async fn get_correlations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CorrelationResponse>>> {
    let correlations = InsightsService::get_correlations(state.db(), auth.user_id).await?;
    Ok(Json(correlations))
}
