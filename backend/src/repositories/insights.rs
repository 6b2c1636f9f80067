//! Insight, habit pattern, and correlation repositories

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Insight record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InsightRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub insight_type: String,
    pub title: String,
    pub body: String,
    pub priority: i32,
    pub is_read: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for storing a generated insight
#[derive(Debug, Clone)]
pub struct CreateInsight {
    pub user_id: Uuid,
    pub insight_type: String,
    pub title: String,
    pub body: String,
    pub priority: i32,
    pub expires_at: DateTime<Utc>,
}

/// Insight repository
pub struct InsightRepository;

impl InsightRepository {
    /// Store a generated insight
    pub async fn create(pool: &PgPool, input: CreateInsight) -> Result<InsightRecord> {
        let record = sqlx::query_as::<_, InsightRecord>(
            r#"
            INSERT INTO insights (user_id, insight_type, title, body, priority, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, insight_type, title, body, priority, is_read, expires_at, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.insight_type)
        .bind(&input.title)
        .bind(&input.body)
        .bind(input.priority)
        .bind(input.expires_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Unexpired insights, highest priority first, newest first within priority
    pub async fn get_current(pool: &PgPool, user_id: Uuid) -> Result<Vec<InsightRecord>> {
        let records = sqlx::query_as::<_, InsightRecord>(
            r#"
            SELECT id, user_id, insight_type, title, body, priority, is_read, expires_at, created_at
            FROM insights
            WHERE user_id = $1 AND expires_at > NOW()
            ORDER BY priority ASC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Whether any insight was generated for the user today (UTC)
    pub async fn generated_today(pool: &PgPool, user_id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM insights
                WHERE user_id = $1 AND (created_at AT TIME ZONE 'UTC')::date = CURRENT_DATE
            )
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Mark an insight as read
    pub async fn mark_read(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"UPDATE insights SET is_read = TRUE WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Habit pattern record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HabitPatternRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pattern_type: String,
    pub description: String,
    pub frequency_score: Decimal,
    pub is_active: bool,
    pub detected_at: DateTime<Utc>,
}

/// Habit pattern repository
pub struct HabitPatternRepository;

impl HabitPatternRepository {
    /// Record a detected pattern
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        pattern_type: &str,
        description: &str,
        frequency_score: Decimal,
    ) -> Result<HabitPatternRecord> {
        let record = sqlx::query_as::<_, HabitPatternRecord>(
            r#"
            INSERT INTO habit_patterns (user_id, pattern_type, description, frequency_score)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, pattern_type, description, frequency_score, is_active, detected_at
            "#,
        )
        .bind(user_id)
        .bind(pattern_type)
        .bind(description)
        .bind(frequency_score)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Active patterns, strongest first
    pub async fn get_active(pool: &PgPool, user_id: Uuid) -> Result<Vec<HabitPatternRecord>> {
        let records = sqlx::query_as::<_, HabitPatternRecord>(
            r#"
            SELECT id, user_id, pattern_type, description, frequency_score, is_active, detected_at
            FROM habit_patterns
            WHERE user_id = $1 AND is_active = TRUE
            ORDER BY frequency_score DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

/// Metric correlation record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CorrelationRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub metric_a: String,
    pub metric_b: String,
    pub coefficient: Decimal,
    pub is_significant: bool,
    pub computed_at: DateTime<Utc>,
}

/// Metric correlation repository
pub struct CorrelationRepository;

impl CorrelationRepository {
    /// Record a computed correlation
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        metric_a: &str,
        metric_b: &str,
        coefficient: Decimal,
        is_significant: bool,
    ) -> Result<CorrelationRecord> {
        let record = sqlx::query_as::<_, CorrelationRecord>(
            r#"
            INSERT INTO metric_correlations (user_id, metric_a, metric_b, coefficient, is_significant)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, metric_a, metric_b, coefficient, is_significant, computed_at
            "#,
        )
        .bind(user_id)
        .bind(metric_a)
        .bind(metric_b)
        .bind(coefficient)
        .bind(is_significant)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Significant correlations, strongest first
    pub async fn get_significant(pool: &PgPool, user_id: Uuid) -> Result<Vec<CorrelationRecord>> {
        let records = sqlx::query_as::<_, CorrelationRecord>(
            r#"
            SELECT id, user_id, metric_a, metric_b, coefficient, is_significant, computed_at
            FROM metric_correlations
            WHERE user_id = $1 AND is_significant = TRUE
            ORDER BY ABS(coefficient) DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
