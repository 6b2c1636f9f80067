//! Health metrics and user stats service

use crate::error::ApiError;
use crate::repositories::{
    HealthMetricsRecord, HealthMetricsRepository, UpdateHealthMetrics, UpdateUserStats,
    UserStatsRecord, UserStatsRepository,
};
use nomadic_performance_shared::types::{
    HealthMetricsResponse, UpdateHealthMetricsRequest, UpdateUserStatsRequest, UserStatsResponse,
};
use nomadic_performance_shared::validation::{validate_heart_rate, validate_sleep_quality};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Health metrics and user stats service
pub struct MetricsService;

impl MetricsService {
    /// Get the user's current health metrics
    pub async fn get_health_metrics(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<HealthMetricsResponse, ApiError> {
        let record = HealthMetricsRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("No health metrics recorded".to_string()))?;

        Ok(Self::metrics_response(record))
    }

    /// Update the user's health metrics, keeping stored values for absent fields
    pub async fn update_health_metrics(
        pool: &PgPool,
        user_id: Uuid,
        request: UpdateHealthMetricsRequest,
    ) -> Result<HealthMetricsResponse, ApiError> {
        if request.resting_heart_rate.is_none()
            && request.sleep_quality.is_none()
            && request.body_fat_pct.is_none()
        {
            return Err(ApiError::Validation(
                "At least one metric must be provided".to_string(),
            ));
        }

        if let Some(bpm) = request.resting_heart_rate {
            validate_heart_rate(bpm).map_err(ApiError::Validation)?;
        }
        if let Some(score) = request.sleep_quality {
            validate_sleep_quality(score).map_err(ApiError::Validation)?;
        }
        if let Some(pct) = request.body_fat_pct {
            if pct < Decimal::ZERO || pct > Decimal::from(100) {
                return Err(ApiError::Validation(
                    "Body fat percentage must be between 0 and 100".to_string(),
                ));
            }
        }

        let record = HealthMetricsRepository::upsert(
            pool,
            user_id,
            UpdateHealthMetrics {
                resting_heart_rate: request.resting_heart_rate,
                sleep_quality: request.sleep_quality,
                body_fat_pct: request.body_fat_pct,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::metrics_response(record))
    }

    /// Get the user's stats, defaulting to zeros when nothing is stored
    pub async fn get_user_stats(pool: &PgPool, user_id: Uuid) -> Result<UserStatsResponse, ApiError> {
        let record = UserStatsRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(match record {
            Some(r) => Self::stats_response(r),
            None => UserStatsResponse {
                fitness_score: 0,
                recovery_score: 0,
                streak_days: 0,
            },
        })
    }

    /// Update the user's stats, keeping stored values for absent fields
    pub async fn update_user_stats(
        pool: &PgPool,
        user_id: Uuid,
        request: UpdateUserStatsRequest,
    ) -> Result<UserStatsResponse, ApiError> {
        for (label, value) in [
            ("Fitness score", request.fitness_score),
            ("Recovery score", request.recovery_score),
        ] {
            if let Some(v) = value {
                if !(0..=100).contains(&v) {
                    return Err(ApiError::Validation(format!(
                        "{} must be between 0 and 100",
                        label
                    )));
                }
            }
        }
        if let Some(days) = request.streak_days {
            if days < 0 {
                return Err(ApiError::Validation(
                    "Streak days cannot be negative".to_string(),
                ));
            }
        }

        let record = UserStatsRepository::upsert(
            pool,
            user_id,
            UpdateUserStats {
                fitness_score: request.fitness_score,
                recovery_score: request.recovery_score,
                streak_days: request.streak_days,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::stats_response(record))
    }

    fn metrics_response(record: HealthMetricsRecord) -> HealthMetricsResponse {
        HealthMetricsResponse {
            resting_heart_rate: record.resting_heart_rate,
            sleep_quality: record.sleep_quality,
            body_fat_pct: record.body_fat_pct,
            recorded_on: record.recorded_on,
        }
    }

    fn stats_response(record: UserStatsRecord) -> UserStatsResponse {
        UserStatsResponse {
            fitness_score: record.fitness_score,
            recovery_score: record.recovery_score,
            streak_days: record.streak_days,
        }
    }
}
