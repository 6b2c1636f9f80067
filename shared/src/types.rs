//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{GoalStatus, Intensity, MealType};

/// Pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Date query parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

// ============================================================================
// Authentication
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workouts
// ============================================================================

/// Log workout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWorkoutRequest {
    pub workout_type: String,
    pub duration_minutes: i32,
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub completed_at: DateTime<Utc>,
}

/// Workout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub intensity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed_at: DateTime<Utc>,
}

/// Recent workouts query parameters
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecentWorkoutsQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Trailing seven day workout statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyWorkoutStats {
    pub workout_count: i64,
    pub total_minutes: i64,
}

// ============================================================================
// Health Metrics and User Stats
// ============================================================================

/// Partial update of current health metrics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateHealthMetricsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<Decimal>,
}

/// Current health metrics response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetricsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<Decimal>,
    pub recorded_on: NaiveDate,
}

/// Partial update of user stats
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserStatsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak_days: Option<i32>,
}

/// User stats response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub fitness_score: i32,
    pub recovery_score: i32,
    pub streak_days: i32,
}

// ============================================================================
// Goals
// ============================================================================

/// Create goal request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    pub target_value: Decimal,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Update goal progress request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGoalProgressRequest {
    pub current_value: Decimal,
}

/// Goal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub id: String,
    pub title: String,
    pub target_value: Decimal,
    pub current_value: Decimal,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub status: GoalStatus,
}

// ============================================================================
// Food Items
// ============================================================================

/// Create or update a catalog food item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub serving_size: Decimal,
    pub serving_unit: String,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<i32>,
}

/// Food item response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub serving_size: Decimal,
    pub serving_unit: String,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<i32>,
}

/// Food search query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSearchQuery {
    pub q: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Catalog paging parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

// ============================================================================
// Meals
// ============================================================================

/// One food line in a meal or template request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealItemInput {
    pub food_item_id: String,
    pub quantity: Decimal,
}

/// Create meal request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealRequest {
    pub meal_type: MealType,
    pub eaten_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<MealItemInput>,
}

/// Meal item response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealItemResponse {
    pub id: String,
    pub food_item_id: String,
    pub quantity: Decimal,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// Meal response with items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealResponse {
    pub id: String,
    pub meal_type: String,
    pub eaten_on: NaiveDate,
    pub total_calories: i32,
    pub total_protein_g: Decimal,
    pub total_carbs_g: Decimal,
    pub total_fat_g: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<MealItemResponse>,
}

/// Daily nutrition summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNutritionResponse {
    pub date: NaiveDate,
    pub total_calories: i64,
    pub total_protein_g: Decimal,
    pub total_carbs_g: Decimal,
    pub total_fat_g: Decimal,
    pub meal_count: i64,
}

/// Upsert nutrition goal request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertNutritionGoalRequest {
    pub daily_calories: i32,
    pub daily_protein_g: Decimal,
    pub daily_carbs_g: Decimal,
    pub daily_fat_g: Decimal,
}

/// Nutrition goal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionGoalResponse {
    pub daily_calories: i32,
    pub daily_protein_g: Decimal,
    pub daily_carbs_g: Decimal,
    pub daily_fat_g: Decimal,
}

// ============================================================================
// Meal Templates
// ============================================================================

/// Create meal template request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealTemplateRequest {
    pub name: String,
    pub meal_type: MealType,
    pub items: Vec<MealItemInput>,
}

/// Meal template summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTemplateResponse {
    pub id: String,
    pub name: String,
    pub meal_type: String,
    pub total_calories: i32,
    pub total_protein_g: Decimal,
    pub total_carbs_g: Decimal,
    pub total_fat_g: Decimal,
}

/// Meal template with items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTemplateDetailResponse {
    pub template: MealTemplateResponse,
    pub items: Vec<MealItemResponse>,
}

/// Log a meal from a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFromTemplateRequest {
    pub eaten_on: NaiveDate,
}

// ============================================================================
// Hydration and Caffeine
// ============================================================================

/// Log hydration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogHydrationRequest {
    pub amount_ml: i32,
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

/// Hydration log response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationLogResponse {
    pub id: String,
    pub amount_ml: i32,
    pub logged_at: DateTime<Utc>,
}

/// Daily hydration total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyHydrationResponse {
    pub date: NaiveDate,
    pub total_ml: i64,
    pub entry_count: i64,
}

/// Log caffeine request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogCaffeineRequest {
    pub amount_mg: i32,
    pub source: String,
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

/// Caffeine log response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaffeineLogResponse {
    pub id: String,
    pub amount_mg: i32,
    pub source: String,
    pub logged_at: DateTime<Utc>,
}

/// Daily caffeine total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCaffeineResponse {
    pub date: NaiveDate,
    pub total_mg: i64,
    pub entry_count: i64,
}

// ============================================================================
// Insights
// ============================================================================

/// Insight response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightResponse {
    pub id: String,
    pub insight_type: String,
    pub title: String,
    pub body: String,
    pub priority: i32,
    pub is_read: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Habit pattern response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitPatternResponse {
    pub id: String,
    pub pattern_type: String,
    pub description: String,
    pub frequency_score: Decimal,
    pub detected_at: DateTime<Utc>,
}

/// Metric correlation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationResponse {
    pub id: String,
    pub metric_a: String,
    pub metric_b: String,
    pub coefficient: Decimal,
    pub computed_at: DateTime<Utc>,
}

// ============================================================================
// Relay
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub from_name: String,
    pub from_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

/// Newsletter signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

/// Relay acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayAck {
    pub status: String,
}
