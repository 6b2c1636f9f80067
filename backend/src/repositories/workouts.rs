//! Workout repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub intensity: String,
    pub notes: Option<String>,
    pub completed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for logging a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub intensity: String,
    pub notes: Option<String>,
    pub completed_at: DateTime<Utc>,
}

/// Trailing seven day workout totals
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WeeklyWorkoutRow {
    pub workout_count: i64,
    pub total_minutes: i64,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Log a completed workout
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, workout_type, duration_minutes, intensity, notes, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, workout_type, duration_minutes, intensity, notes, completed_at, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.workout_type)
        .bind(input.duration_minutes)
        .bind(&input.intensity)
        .bind(&input.notes)
        .bind(input.completed_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Most recent workouts, newest first
    pub async fn get_recent(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, workout_type, duration_minutes, intensity, notes, completed_at, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY completed_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Count and total minutes over the trailing seven days
    pub async fn get_weekly_stats(pool: &PgPool, user_id: Uuid) -> Result<WeeklyWorkoutRow> {
        let row = sqlx::query_as::<_, WeeklyWorkoutRow>(
            r#"
            SELECT
                COUNT(*)::bigint as workout_count,
                COALESCE(SUM(duration_minutes), 0)::bigint as total_minutes
            FROM workouts
            WHERE user_id = $1 AND completed_at >= NOW() - INTERVAL '7 days'
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Delete a workout entry
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM workouts WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
