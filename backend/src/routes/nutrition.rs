//! Nutrition routes: food catalog, meals, daily totals, macro goals

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use nomadic_performance_shared::types::{
    CreateMealRequest, DailyNutritionResponse, DateQuery, FoodItemInput, FoodItemResponse,
    FoodSearchQuery, MealResponse, NutritionGoalResponse, PageQuery, UpsertNutritionGoalRequest,
};
use uuid::Uuid;

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", post(create_food_item).get(list_foods))
        .route("/foods/search", get(search_foods))
        .route(
            "/foods/:id",
            get(get_food).put(update_food).delete(delete_food),
        )
        .route("/meals", post(log_meal).get(get_meals_by_date))
        .route("/meals/:id", axum::routing::delete(delete_meal))
        .route("/summary", get(get_daily_summary))
        .route("/goal", put(upsert_goal).get(get_goal))
}

/// POST /api/v1/nutrition/foods
async fn create_food_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<FoodItemInput>,
) -> ApiResult<(StatusCode, Json<FoodItemResponse>)> {
    let food = NutritionService::create_food_item(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(food)))
}

/// GET /api/v1/nutrition/foods?limit=20&offset=0
async fn list_foods(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Vec<FoodItemResponse>>> {
    let foods = NutritionService::list_food_items(state.db(), query.limit, query.offset).await?;
    Ok(Json(foods))
}

/// GET /api/v1/nutrition/foods/:id
async fn get_food(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<FoodItemResponse>> {
    let food = NutritionService::get_food_item(state.db(), id).await?;
    Ok(Json(food))
}

/// PUT /api/v1/nutrition/foods/:id
async fn update_food(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<FoodItemInput>,
) -> ApiResult<Json<FoodItemResponse>> {
    let food = NutritionService::update_food_item(state.db(), id, req).await?;
    Ok(Json(food))
}

/// DELETE /api/v1/nutrition/foods/:id
async fn delete_food(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    NutritionService::delete_food_item(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/nutrition/foods/search?q=oats
async fn search_foods(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<FoodSearchQuery>,
) -> ApiResult<Json<Vec<FoodItemResponse>>> {
    let foods = NutritionService::search_foods(state.db(), &query.q, query.limit).await?;
    Ok(Json(foods))
}

/// POST /api/v1/nutrition/meals
async fn log_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMealRequest>,
) -> ApiResult<(StatusCode, Json<MealResponse>)> {
    let meal = NutritionService::log_meal(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

/// GET /api/v1/nutrition/meals?date=YYYY-MM-DD
async fn get_meals_by_date(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<Vec<MealResponse>>> {
    let meals = NutritionService::get_meals_by_date(state.db(), auth.user_id, query.date).await?;
    Ok(Json(meals))
}

/// DELETE /api/v1/nutrition/meals/:id
async fn delete_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    NutritionService::delete_meal(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/nutrition/summary?date=YYYY-MM-DD
async fn get_daily_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<DailyNutritionResponse>> {
    let summary =
        NutritionService::get_daily_summary(state.db(), auth.user_id, query.date).await?;
    Ok(Json(summary))
}

/// PUT /api/v1/nutrition/goal
async fn upsert_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpsertNutritionGoalRequest>,
) -> ApiResult<Json<NutritionGoalResponse>> {
    let goal = NutritionService::upsert_nutrition_goal(state.db(), auth.user_id, req).await?;
    Ok(Json(goal))
}

/// GET /api/v1/nutrition/goal
async fn get_goal(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<NutritionGoalResponse>> {
    let goal = NutritionService::get_nutrition_goal(state.db(), auth.user_id).await?;
    Ok(Json(goal))
}
