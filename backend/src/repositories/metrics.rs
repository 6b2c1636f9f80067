//! Current health metrics and user stats repositories
//!
//! Both tables hold exactly one row per user and support partial
//! upserts: absent fields keep their stored values.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Current health metrics row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HealthMetricsRecord {
    pub user_id: Uuid,
    pub resting_heart_rate: Option<i32>,
    pub sleep_quality: Option<i32>,
    pub body_fat_pct: Option<Decimal>,
    pub recorded_on: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

/// Partial health metrics update
#[derive(Debug, Clone, Default)]
pub struct UpdateHealthMetrics {
    pub resting_heart_rate: Option<i32>,
    pub sleep_quality: Option<i32>,
    pub body_fat_pct: Option<Decimal>,
}

/// Health metrics repository
pub struct HealthMetricsRepository;

impl HealthMetricsRepository {
    /// Get the user's current metrics row
    pub async fn get_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<HealthMetricsRecord>> {
        let record = sqlx::query_as::<_, HealthMetricsRecord>(
            r#"
            SELECT user_id, resting_heart_rate, sleep_quality, body_fat_pct, recorded_on, updated_at
            FROM health_metrics
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Upsert the user's current metrics, keeping stored values for absent fields
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdateHealthMetrics,
    ) -> Result<HealthMetricsRecord> {
        let record = sqlx::query_as::<_, HealthMetricsRecord>(
            r#"
            INSERT INTO health_metrics (user_id, resting_heart_rate, sleep_quality, body_fat_pct, recorded_on)
            VALUES ($1, $2, $3, $4, CURRENT_DATE)
            ON CONFLICT (user_id) DO UPDATE SET
                resting_heart_rate = COALESCE(EXCLUDED.resting_heart_rate, health_metrics.resting_heart_rate),
                sleep_quality = COALESCE(EXCLUDED.sleep_quality, health_metrics.sleep_quality),
                body_fat_pct = COALESCE(EXCLUDED.body_fat_pct, health_metrics.body_fat_pct),
                recorded_on = CURRENT_DATE,
                updated_at = NOW()
            RETURNING user_id, resting_heart_rate, sleep_quality, body_fat_pct, recorded_on, updated_at
            "#,
        )
        .bind(user_id)
        .bind(updates.resting_heart_rate)
        .bind(updates.sleep_quality)
        .bind(updates.body_fat_pct)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}

/// User stats row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserStatsRecord {
    pub user_id: Uuid,
    pub fitness_score: i32,
    pub recovery_score: i32,
    pub streak_days: i32,
    pub updated_at: DateTime<Utc>,
}

/// Partial user stats update
#[derive(Debug, Clone, Default)]
pub struct UpdateUserStats {
    pub fitness_score: Option<i32>,
    pub recovery_score: Option<i32>,
    pub streak_days: Option<i32>,
}

/// User stats repository
pub struct UserStatsRepository;

impl UserStatsRepository {
    /// Get the user's stats row
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<UserStatsRecord>> {
        let record = sqlx::query_as::<_, UserStatsRecord>(
            r#"
            SELECT user_id, fitness_score, recovery_score, streak_days, updated_at
            FROM user_stats
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Upsert the user's stats, keeping stored values for absent fields
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdateUserStats,
    ) -> Result<UserStatsRecord> {
        let record = sqlx::query_as::<_, UserStatsRecord>(
            r#"
            INSERT INTO user_stats (user_id, fitness_score, recovery_score, streak_days)
            VALUES ($1, COALESCE($2, 0), COALESCE($3, 0), COALESCE($4, 0))
            ON CONFLICT (user_id) DO UPDATE SET
                fitness_score = COALESCE($2, user_stats.fitness_score),
                recovery_score = COALESCE($3, user_stats.recovery_score),
                streak_days = COALESCE($4, user_stats.streak_days),
                updated_at = NOW()
            RETURNING user_id, fitness_score, recovery_score, streak_days, updated_at
            "#,
        )
        .bind(user_id)
        .bind(updates.fitness_score)
        .bind(updates.recovery_score)
        .bind(updates.streak_days)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
