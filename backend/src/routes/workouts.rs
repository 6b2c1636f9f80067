//! Workout tracking routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use nomadic_performance_shared::types::{
    LogWorkoutRequest, RecentWorkoutsQuery, WeeklyWorkoutStats, WorkoutResponse,
};
use uuid::Uuid;

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(log_workout).get(get_recent))
        .route("/weekly", get(get_weekly_stats))
        .route("/:id", delete(delete_workout))
}

/// POST /api/v1/workouts
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = WorkoutService::log_workout(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workouts
async fn get_recent(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<RecentWorkoutsQuery>,
) -> ApiResult<Json<Vec<WorkoutResponse>>> {
    let workouts = WorkoutService::get_recent(state.db(), auth.user_id, query.limit).await?;
    Ok(Json(workouts))
}

/// GET /api/v1/workouts/weekly
async fn get_weekly_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WeeklyWorkoutStats>> {
    let stats = WorkoutService::get_weekly_stats(state.db(), auth.user_id).await?;
    Ok(Json(stats))
}

/// DELETE /api/v1/workouts/:id
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    WorkoutService::delete_workout(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
