//! Hydration and caffeine intake repositories

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Hydration log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HydrationLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount_ml: i32,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Per-day hydration totals
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyIntakeRow {
    pub total: i64,
    pub entry_count: i64,
}

/// Hydration log repository
pub struct HydrationLogRepository;

impl HydrationLogRepository {
    /// Log a drink
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        amount_ml: i32,
        logged_at: DateTime<Utc>,
    ) -> Result<HydrationLogRecord> {
        let record = sqlx::query_as::<_, HydrationLogRecord>(
            r#"
            INSERT INTO hydration_logs (user_id, amount_ml, logged_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, amount_ml, logged_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(amount_ml)
        .bind(logged_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Entries logged on a given UTC day, oldest first
    pub async fn get_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<HydrationLogRecord>> {
        let records = sqlx::query_as::<_, HydrationLogRecord>(
            r#"
            SELECT id, user_id, amount_ml, logged_at, created_at
            FROM hydration_logs
            WHERE user_id = $1 AND (logged_at AT TIME ZONE 'UTC')::date = $2
            ORDER BY logged_at ASC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Total millilitres and entry count for a UTC day
    pub async fn get_daily_total(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyIntakeRow> {
        let row = sqlx::query_as::<_, DailyIntakeRow>(
            r#"
            SELECT
                COALESCE(SUM(amount_ml), 0)::bigint as total,
                COUNT(*)::bigint as entry_count
            FROM hydration_logs
            WHERE user_id = $1 AND (logged_at AT TIME ZONE 'UTC')::date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Average daily millilitres over a trailing window
    ///
    /// Days without entries count as zero.
    pub async fn get_trailing_daily_average(
        pool: &PgPool,
        user_id: Uuid,
        days: i32,
    ) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(amount_ml), 0)::bigint
            FROM hydration_logs
            WHERE user_id = $1 AND logged_at >= NOW() - ($2::int * INTERVAL '1 day')
            "#,
        )
        .bind(user_id)
        .bind(days)
        .fetch_one(pool)
        .await?;

        Ok(total / i64::from(days.max(1)))
    }

    /// Delete a hydration entry
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM hydration_logs WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Caffeine log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CaffeineLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount_mg: i32,
    pub source: String,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Caffeine log repository
pub struct CaffeineLogRepository;

impl CaffeineLogRepository {
    /// Log a caffeine intake
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        amount_mg: i32,
        source: &str,
        logged_at: DateTime<Utc>,
    ) -> Result<CaffeineLogRecord> {
        let record = sqlx::query_as::<_, CaffeineLogRecord>(
            r#"
            INSERT INTO caffeine_logs (user_id, amount_mg, source, logged_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, amount_mg, source, logged_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(amount_mg)
        .bind(source)
        .bind(logged_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Entries logged on a given UTC day, oldest first
    pub async fn get_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<CaffeineLogRecord>> {
        let records = sqlx::query_as::<_, CaffeineLogRecord>(
            r#"
            SELECT id, user_id, amount_mg, source, logged_at, created_at
            FROM caffeine_logs
            WHERE user_id = $1 AND (logged_at AT TIME ZONE 'UTC')::date = $2
            ORDER BY logged_at ASC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Total milligrams and entry count for a UTC day
    pub async fn get_daily_total(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyIntakeRow> {
        let row = sqlx::query_as::<_, DailyIntakeRow>(
            r#"
            SELECT
                COALESCE(SUM(amount_mg), 0)::bigint as total,
                COUNT(*)::bigint as entry_count
            FROM caffeine_logs
            WHERE user_id = $1 AND (logged_at AT TIME ZONE 'UTC')::date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Average daily milligrams over a trailing window
    ///
    /// Days without entries count as zero.
    pub async fn get_trailing_daily_average(
        pool: &PgPool,
        user_id: Uuid,
        days: i32,
    ) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(amount_mg), 0)::bigint
            FROM caffeine_logs
            WHERE user_id = $1 AND logged_at >= NOW() - ($2::int * INTERVAL '1 day')
            "#,
        )
        .bind(user_id)
        .bind(days)
        .fetch_one(pool)
        .await?;

        Ok(total / i64::from(days.max(1)))
    }

    /// Delete a caffeine entry
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM caffeine_logs WHERE id = $1 AND user_id = $2"#)
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
