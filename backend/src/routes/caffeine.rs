//! Caffeine tracking routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::CaffeineService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use nomadic_performance_shared::types::{
    CaffeineLogResponse, DailyCaffeineResponse, DateQuery, LogCaffeineRequest,
};
use serde::Serialize;
use uuid::Uuid;

/// Create caffeine routes
pub fn caffeine_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(log_intake))
        .route("/daily", get(get_daily))
        .route("/:id", delete(delete_entry))
}

/// Daily caffeine view: totals plus the individual entries
#[derive(Debug, Serialize)]
struct DailyCaffeineView {
    #[serde(flatten)]
    summary: DailyCaffeineResponse,
    entries: Vec<CaffeineLogResponse>,
}

/// POST /api/v1/caffeine
async fn log_intake(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogCaffeineRequest>,
) -> ApiResult<(StatusCode, Json<CaffeineLogResponse>)> {
    let entry = CaffeineService::log_intake(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/caffeine/daily?date=YYYY-MM-DD
async fn get_daily(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<DailyCaffeineView>> {
    let (summary, entries) = CaffeineService::get_daily(state.db(), auth.user_id, query.date).await?;
    Ok(Json(DailyCaffeineView { summary, entries }))
}

/// DELETE /api/v1/caffeine/:id
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    CaffeineService::delete_entry(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
