//! Goal tracking service
//!
//! Progress updates complete a goal automatically once the current
//! value reaches the target.

use crate::error::ApiError;
use crate::repositories::{CreateGoal, GoalRecord, GoalRepository};
use nomadic_performance_shared::models::GoalStatus;
use nomadic_performance_shared::types::{CreateGoalRequest, GoalResponse, UpdateGoalProgressRequest};
use nomadic_performance_shared::validation::validate_name;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Goal service
pub struct GoalService;

impl GoalService {
    /// Create a new goal
    pub async fn create_goal(
        pool: &PgPool,
        user_id: Uuid,
        request: CreateGoalRequest,
    ) -> Result<GoalResponse, ApiError> {
        validate_name(&request.title, 200).map_err(ApiError::Validation)?;

        if request.target_value <= Decimal::ZERO {
            return Err(ApiError::Validation(
                "Target value must be positive".to_string(),
            ));
        }
        if request.unit.trim().is_empty() {
            return Err(ApiError::Validation("Unit cannot be empty".to_string()));
        }

        let record = GoalRepository::create(
            pool,
            CreateGoal {
                user_id,
                title: request.title,
                target_value: request.target_value,
                unit: request.unit,
                deadline: request.deadline,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Active goals, nearest deadline first
    pub async fn get_active_goals(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<GoalResponse>, ApiError> {
        let records = GoalRepository::get_active(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// Update a goal's progress
    ///
    /// Reaching the target flips the goal to completed. A completed
    /// goal never reverts to active when progress drops back below the
    /// target.
    pub async fn update_progress(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        request: UpdateGoalProgressRequest,
    ) -> Result<GoalResponse, ApiError> {
        if request.current_value < Decimal::ZERO {
            return Err(ApiError::Validation(
                "Current value cannot be negative".to_string(),
            ));
        }

        let goal = GoalRepository::find_by_id(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))?;

        if goal.status == GoalStatus::Abandoned.as_str() {
            return Err(ApiError::Conflict(
                "Cannot update an abandoned goal".to_string(),
            ));
        }

        let status = if request.current_value >= goal.target_value
            || goal.status == GoalStatus::Completed.as_str()
        {
            GoalStatus::Completed
        } else {
            GoalStatus::Active
        };

        let record = GoalRepository::update_progress(
            pool,
            id,
            user_id,
            request.current_value,
            status.as_str(),
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))?;

        Ok(Self::to_response(record))
    }

    /// Delete a goal
    pub async fn delete_goal(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = GoalRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Goal not found".to_string()));
        }

        Ok(())
    }

    fn to_response(record: GoalRecord) -> GoalResponse {
        let status = GoalStatus::parse(&record.status).unwrap_or(GoalStatus::Active);
        GoalResponse {
            id: record.id.to_string(),
            title: record.title,
            target_value: record.target_value,
            current_value: record.current_value,
            unit: record.unit,
            deadline: record.deadline,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
