//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod food_items;
pub mod goals;
pub mod hydration;
pub mod insights;
pub mod meals;
pub mod metrics;
pub mod templates;
pub mod user;
pub mod workouts;

pub use food_items::{CreateFoodItem, FoodItemRecord, FoodItemRepository};
pub use goals::{CreateGoal, GoalRecord, GoalRepository};
pub use hydration::{
    CaffeineLogRecord, CaffeineLogRepository, DailyIntakeRow, HydrationLogRecord,
    HydrationLogRepository,
};
pub use insights::{
    CorrelationRecord, CorrelationRepository, CreateInsight, HabitPatternRecord,
    HabitPatternRepository, InsightRecord, InsightRepository,
};
pub use meals::{
    CreateMeal, DailyNutritionRow, MealItemRecord, MealRecord, MealRepository, NewMealItem,
    NutritionGoalRecord, NutritionGoalRepository,
};
pub use metrics::{
    HealthMetricsRecord, HealthMetricsRepository, UpdateHealthMetrics, UpdateUserStats,
    UserStatsRecord, UserStatsRepository,
};
pub use templates::{
    CreateMealTemplate, MealTemplateRecord, MealTemplateRepository, NewTemplateItem,
    TemplateItemRecord,
};
pub use user::{UserRecord, UserRepository};
pub use workouts::{CreateWorkout, WeeklyWorkoutRow, WorkoutRecord, WorkoutRepository};
