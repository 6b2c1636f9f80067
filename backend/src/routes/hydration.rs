//! Hydration tracking routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::HydrationService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use nomadic_performance_shared::types::{
    DailyHydrationResponse, DateQuery, HydrationLogResponse, LogHydrationRequest,
};
use serde::Serialize;
use uuid::Uuid;

/// Create hydration routes
pub fn hydration_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(log_intake))
        .route("/daily", get(get_daily))
        .route("/:id", delete(delete_entry))
}

/// Daily hydration view: totals plus the individual entries
#[derive(Debug, Serialize)]
struct DailyHydrationView {
    #[serde(flatten)]
    summary: DailyHydrationResponse,
    entries: Vec<HydrationLogResponse>,
}

/// POST /api/v1/hydration
async fn log_intake(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogHydrationRequest>,
) -> ApiResult<(StatusCode, Json<HydrationLogResponse>)> {
    let entry = HydrationService::log_intake(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/hydration/daily?date=YYYY-MM-DD
async fn get_daily(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<DailyHydrationView>> {
    let (summary, entries) = HydrationService::get_daily(state.db(), auth.user_id, query.date).await?;
    Ok(Json(DailyHydrationView { summary, entries }))
}

/// DELETE /api/v1/hydration/:id
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    HydrationService::delete_entry(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
