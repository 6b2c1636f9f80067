//! Goal repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Goal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub target_value: Decimal,
    pub current_value: Decimal,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct CreateGoal {
    pub user_id: Uuid,
    pub title: String,
    pub target_value: Decimal,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
}

/// Goal repository
pub struct GoalRepository;

impl GoalRepository {
    /// Create a new goal, starting at zero progress
    pub async fn create(pool: &PgPool, input: CreateGoal) -> Result<GoalRecord> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            INSERT INTO goals (user_id, title, target_value, unit, deadline)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, target_value, current_value, unit, deadline, status, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(input.target_value)
        .bind(&input.unit)
        .bind(input.deadline)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Active goals, nearest deadline first
    pub async fn get_active(pool: &PgPool, user_id: Uuid) -> Result<Vec<GoalRecord>> {
        let records = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT id, user_id, title, target_value, current_value, unit, deadline, status, created_at, updated_at
            FROM goals
            WHERE user_id = $1 AND status = 'active'
            ORDER BY deadline ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a goal by ID, scoped to its owner
    pub async fn find_by_id(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<Option<GoalRecord>> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT id, user_id, title, target_value, current_value, unit, deadline, status, created_at, updated_at
            FROM goals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a goal's progress and status
    pub async fn update_progress(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        current_value: Decimal,
        status: &str,
    ) -> Result<Option<GoalRecord>> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            UPDATE goals
            SET current_value = $3, status = $4, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, target_value, current_value, unit, deadline, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(current_value)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a goal
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM goals WHERE id = $1 AND user_id = $2"#)
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
