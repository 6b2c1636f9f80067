//! Workout tracking service

use crate::error::ApiError;
use crate::repositories::{CreateWorkout, WorkoutRecord, WorkoutRepository};
use nomadic_performance_shared::types::{LogWorkoutRequest, WeeklyWorkoutStats, WorkoutResponse};
use nomadic_performance_shared::validation::validate_workout_duration;
use sqlx::PgPool;
use uuid::Uuid;

const DEFAULT_RECENT_LIMIT: i64 = 10;
const MAX_RECENT_LIMIT: i64 = 100;

/// Workout service
pub struct WorkoutService;

impl WorkoutService {
    /// Log a completed workout
    pub async fn log_workout(
        pool: &PgPool,
        user_id: Uuid,
        request: LogWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        validate_workout_duration(request.duration_minutes).map_err(ApiError::Validation)?;

        if request.workout_type.trim().is_empty() {
            return Err(ApiError::Validation(
                "Workout type cannot be empty".to_string(),
            ));
        }

        let record = WorkoutRepository::create(
            pool,
            CreateWorkout {
                user_id,
                workout_type: request.workout_type,
                duration_minutes: request.duration_minutes,
                intensity: request.intensity.as_str().to_string(),
                notes: request.notes,
                completed_at: request.completed_at,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Most recent workouts, newest first
    pub async fn get_recent(
        pool: &PgPool,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<WorkoutResponse>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT).clamp(1, MAX_RECENT_LIMIT);

        let records = WorkoutRepository::get_recent(pool, user_id, limit)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// Trailing seven day totals
    pub async fn get_weekly_stats(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<WeeklyWorkoutStats, ApiError> {
        let row = WorkoutRepository::get_weekly_stats(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(WeeklyWorkoutStats {
            workout_count: row.workout_count,
            total_minutes: row.total_minutes,
        })
    }

    /// Delete a workout entry
    pub async fn delete_workout(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        Ok(())
    }

    fn to_response(record: WorkoutRecord) -> WorkoutResponse {
        WorkoutResponse {
            id: record.id.to_string(),
            workout_type: record.workout_type,
            duration_minutes: record.duration_minutes,
            intensity: record.intensity,
            notes: record.notes,
            completed_at: record.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
