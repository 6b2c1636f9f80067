//! Health metrics and user stats routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::MetricsService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use nomadic_performance_shared::types::{
    HealthMetricsResponse, UpdateHealthMetricsRequest, UpdateUserStatsRequest, UserStatsResponse,
};

/// Create health metrics routes
pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/", get(get_health_metrics).put(update_health_metrics))
}

/// Create user stats routes
pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/", get(get_user_stats).put(update_user_stats))
}

/// GET /api/v1/metrics
async fn get_health_metrics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<HealthMetricsResponse>> {
    let metrics = MetricsService::get_health_metrics(state.db(), auth.user_id).await?;
    Ok(Json(metrics))
}

/// PUT /api/v1/metrics
async fn update_health_metrics(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateHealthMetricsRequest>,
) -> ApiResult<Json<HealthMetricsResponse>> {
    let metrics = MetricsService::update_health_metrics(state.db(), auth.user_id, req).await?;
    Ok(Json(metrics))
}

/// GET /api/v1/stats
async fn get_user_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserStatsResponse>> {
    let stats = MetricsService::get_user_stats(state.db(), auth.user_id).await?;
    Ok(Json(stats))
}

/// PUT /api/v1/stats
async fn update_user_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateUserStatsRequest>,
) -> ApiResult<Json<UserStatsResponse>> {
    let stats = MetricsService::update_user_stats(state.db(), auth.user_id, req).await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    // Route tests live in the tests/ directory
}
