//! Insight generation and retrieval
//!
//! Weekly insights are computed from stored logs, so generating twice
//! on the same day yields the same set. Generation is skipped entirely
//! when the user already has insights from today.

use crate::error::ApiError;
use crate::repositories::{
    CaffeineLogRepository, CorrelationRepository, CreateInsight, HabitPatternRepository,
    HydrationLogRepository, InsightRecord, InsightRepository, MealRepository,
    NutritionGoalRepository,
};
use chrono::{Duration, Utc};
use nomadic_performance_shared::models::InsightKind;
use nomadic_performance_shared::types::{
    CorrelationResponse, HabitPatternResponse, InsightResponse,
};
use sqlx::PgPool;
use uuid::Uuid;

const WINDOW_DAYS: i32 = 7;
const PROTEIN_GOAL_SHARE: f64 = 0.8;
const HYDRATION_FLOOR_ML: i64 = 2000;
const CAFFEINE_CEILING_MG: i64 = 400;

/// Insights service
pub struct InsightsService;

impl InsightsService {
    /// Unexpired insights, highest priority first
    pub async fn get_current(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<InsightResponse>, ApiError> {
        let records = InsightRepository::get_current(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// Mark an insight as read
    pub async fn mark_read(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let updated = InsightRepository::mark_read(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !updated {
            return Err(ApiError::NotFound("Insight not found".to_string()));
        }

        Ok(())
    }

    /// Generate this week's insights from stored logs
    ///
    /// Runs at most once per UTC day; repeated calls return the
    /// current set without generating duplicates.
    pub async fn generate_weekly(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<InsightResponse>, ApiError> {
        let already = InsightRepository::generated_today(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !already {
            Self::generate_protein_insight(pool, user_id).await?;
            Self::generate_hydration_insight(pool, user_id).await?;
            Self::generate_caffeine_insight(pool, user_id).await?;
        }

        Self::get_current(pool, user_id).await
    }

    /// Active habit patterns, strongest first
    pub async fn get_habit_patterns(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<HabitPatternResponse>, ApiError> {
        let records = HabitPatternRepository::get_active(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records
            .into_iter()
            .map(|r| HabitPatternResponse {
                id: r.id.to_string(),
                pattern_type: r.pattern_type,
                description: r.description,
                frequency_score: r.frequency_score,
                detected_at: r.detected_at,
            })
            .collect())
    }

    /// Significant metric correlations, strongest first
    pub async fn get_correlations(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<CorrelationResponse>, ApiError> {
        let records = CorrelationRepository::get_significant(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records
            .into_iter()
            .map(|r| CorrelationResponse {
                id: r.id.to_string(),
                metric_a: r.metric_a,
                metric_b: r.metric_b,
                coefficient: r.coefficient,
                computed_at: r.computed_at,
            })
            .collect())
    }

    async fn generate_protein_insight(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
        // No protein target, nothing to measure against
        let Some(goal) = NutritionGoalRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
        else {
            return Ok(());
        };

        let met_days =
            MealRepository::count_protein_goal_days(pool, user_id, goal.daily_protein_g, WINDOW_DAYS)
                .await
                .map_err(ApiError::Internal)?;

        let share = met_days as f64 / f64::from(WINDOW_DAYS);
        let insight = if share >= PROTEIN_GOAL_SHARE {
            CreateInsight {
                user_id,
                insight_type: InsightKind::Achievement.as_str().to_string(),
                title: "Protein target on track".to_string(),
                body: format!(
                    "You hit your protein goal on {} of the last {} days. Keep it up.",
                    met_days, WINDOW_DAYS
                ),
                priority: 1,
                expires_at: Utc::now() + Duration::days(7),
            }
        } else {
            CreateInsight {
                user_id,
                insight_type: InsightKind::Recommendation.as_str().to_string(),
                title: "Protein intake below target".to_string(),
                body: format!(
                    "You hit your protein goal on only {} of the last {} days. Aim for {} g daily.",
                    met_days, WINDOW_DAYS, goal.daily_protein_g
                ),
                priority: 2,
                expires_at: Utc::now() + Duration::days(7),
            }
        };

        InsightRepository::create(pool, insight)
            .await
            .map_err(ApiError::Internal)?;

        Ok(())
    }

    async fn generate_hydration_insight(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
        let avg_ml =
            HydrationLogRepository::get_trailing_daily_average(pool, user_id, WINDOW_DAYS)
                .await
                .map_err(ApiError::Internal)?;

        if avg_ml >= HYDRATION_FLOOR_ML {
            return Ok(());
        }

        InsightRepository::create(
            pool,
            CreateInsight {
                user_id,
                insight_type: InsightKind::Recommendation.as_str().to_string(),
                title: "Drink more water".to_string(),
                body: format!(
                    "Your average intake over the last {} days was {} ml per day. Aim for at least {} ml.",
                    WINDOW_DAYS, avg_ml, HYDRATION_FLOOR_ML
                ),
                priority: 2,
                expires_at: Utc::now() + Duration::days(3),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(())
    }

    async fn generate_caffeine_insight(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
        let avg_mg = CaffeineLogRepository::get_trailing_daily_average(pool, user_id, WINDOW_DAYS)
            .await
            .map_err(ApiError::Internal)?;

        if avg_mg <= CAFFEINE_CEILING_MG {
            return Ok(());
        }

        InsightRepository::create(
            pool,
            CreateInsight {
                user_id,
                insight_type: InsightKind::Habit.as_str().to_string(),
                title: "Caffeine intake is high".to_string(),
                body: format!(
                    "You averaged {} mg of caffeine per day over the last {} days, above the {} mg guideline.",
                    avg_mg, WINDOW_DAYS, CAFFEINE_CEILING_MG
                ),
                priority: 2,
                expires_at: Utc::now() + Duration::days(3),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(())
    }

    fn to_response(record: InsightRecord) -> InsightResponse {
        InsightResponse {
            id: record.id.to_string(),
            insight_type: record.insight_type,
            title: record.title,
            body: record.body,
            priority: record.priority,
            is_read: record.is_read,
            expires_at: record.expires_at,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
