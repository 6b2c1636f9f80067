//! Goal tracking routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::GoalService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post, put},
    Json, Router,
};
use nomadic_performance_shared::types::{
    CreateGoalRequest, GoalResponse, UpdateGoalProgressRequest,
};
use uuid::Uuid;

/// Create goal routes
pub fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_goal).get(get_active_goals))
        .route("/:id/progress", put(update_progress))
        .route("/:id", delete(delete_goal))
}

/// POST /api/v1/goals
async fn create_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateGoalRequest>,
) -> ApiResult<(StatusCode, Json<GoalResponse>)> {
    let goal = GoalService::create_goal(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /api/v1/goals
async fn get_active_goals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let goals = GoalService::get_active_goals(state.db(), auth.user_id).await?;
    Ok(Json(goals))
}

/// PUT /api/v1/goals/:id/progress
async fn update_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateGoalProgressRequest>,
) -> ApiResult<Json<GoalResponse>> {
    let goal = GoalService::update_progress(state.db(), auth.user_id, id, req).await?;
    Ok(Json(goal))
}

/// DELETE /api/v1/goals/:id
async fn delete_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    GoalService::delete_goal(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
