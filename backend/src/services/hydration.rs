//! Hydration and caffeine intake services

use crate::error::ApiError;
use crate::repositories::{
    CaffeineLogRecord, CaffeineLogRepository, HydrationLogRecord, HydrationLogRepository,
};
use chrono::NaiveDate;
use nomadic_performance_shared::types::{
    CaffeineLogResponse, DailyCaffeineResponse, DailyHydrationResponse, HydrationLogResponse,
    LogCaffeineRequest, LogHydrationRequest,
};
use nomadic_performance_shared::validation::{validate_caffeine_amount, validate_hydration_amount};
use sqlx::PgPool;
use uuid::Uuid;

/// Hydration service
pub struct HydrationService;

impl HydrationService {
    /// Log a drink
    pub async fn log_intake(
        pool: &PgPool,
        user_id: Uuid,
        request: LogHydrationRequest,
    ) -> Result<HydrationLogResponse, ApiError> {
        validate_hydration_amount(request.amount_ml).map_err(ApiError::Validation)?;

        let record =
            HydrationLogRepository::create(pool, user_id, request.amount_ml, request.logged_at)
                .await
                .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Entries and totals for a UTC day
    pub async fn get_daily(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<(DailyHydrationResponse, Vec<HydrationLogResponse>), ApiError> {
        let totals = HydrationLogRepository::get_daily_total(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;
        let entries = HydrationLogRepository::get_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        Ok((
            DailyHydrationResponse {
                date,
                total_ml: totals.total,
                entry_count: totals.entry_count,
            },
            entries.into_iter().map(Self::to_response).collect(),
        ))
    }

    /// Delete a hydration entry
    pub async fn delete_entry(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = HydrationLogRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Hydration entry not found".to_string()));
        }

        Ok(())
    }

    fn to_response(record: HydrationLogRecord) -> HydrationLogResponse {
        HydrationLogResponse {
            id: record.id.to_string(),
            amount_ml: record.amount_ml,
            logged_at: record.logged_at,
        }
    }
}

/// Caffeine service
pub struct CaffeineService;

impl CaffeineService {
    /// Log a caffeine intake
    pub async fn log_intake(
        pool: &PgPool,
        user_id: Uuid,
        request: LogCaffeineRequest,
    ) -> Result<CaffeineLogResponse, ApiError> {
        validate_caffeine_amount(request.amount_mg).map_err(ApiError::Validation)?;

        if request.source.trim().is_empty() {
            return Err(ApiError::Validation("Source cannot be empty".to_string()));
        }

        let record = CaffeineLogRepository::create(
            pool,
            user_id,
            request.amount_mg,
            request.source.trim(),
            request.logged_at,
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Entries and totals for a UTC day
    pub async fn get_daily(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<(DailyCaffeineResponse, Vec<CaffeineLogResponse>), ApiError> {
        let totals = CaffeineLogRepository::get_daily_total(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;
        let entries = CaffeineLogRepository::get_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        Ok((
            DailyCaffeineResponse {
                date,
                total_mg: totals.total,
                entry_count: totals.entry_count,
            },
            entries.into_iter().map(Self::to_response).collect(),
        ))
    }

    /// Delete a caffeine entry
    pub async fn delete_entry(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = CaffeineLogRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Caffeine entry not found".to_string()));
        }

        Ok(())
    }

    fn to_response(record: CaffeineLogRecord) -> CaffeineLogResponse {
        CaffeineLogResponse {
            id: record.id.to_string(),
            amount_mg: record.amount_mg,
            source: record.source,
            logged_at: record.logged_at,
        }
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
