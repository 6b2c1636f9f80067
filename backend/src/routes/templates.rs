//! Meal template routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::TemplateService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use nomadic_performance_shared::types::{
    CreateMealTemplateRequest, LogFromTemplateRequest, MealResponse, MealTemplateDetailResponse,
    MealTemplateResponse,
};
use uuid::Uuid;

/// Create meal template routes
pub fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_template).get(get_templates))
        .route("/:id", get(get_template).delete(delete_template))
        .route("/:id/log", post(log_from_template))
}

/// POST /api/v1/templates
async fn create_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMealTemplateRequest>,
) -> ApiResult<(StatusCode, Json<MealTemplateDetailResponse>)> {
    let template = TemplateService::create_template(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/templates
async fn get_templates(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MealTemplateResponse>>> {
    let templates = TemplateService::get_templates(state.db(), auth.user_id).await?;
    Ok(Json(templates))
}

/// GET /api/v1/templates/:id
async fn get_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MealTemplateDetailResponse>> {
    let template = TemplateService::get_template(state.db(), auth.user_id, id).await?;
    Ok(Json(template))
}

/// POST /api/v1/templates/:id/log
async fn log_from_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<LogFromTemplateRequest>,
) -> ApiResult<(StatusCode, Json<MealResponse>)> {
    let meal =
        TemplateService::log_from_template(state.db(), auth.user_id, id, req.eaten_on).await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

/// DELETE /api/v1/templates/:id
async fn delete_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    TemplateService::delete_template(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
