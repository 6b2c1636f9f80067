//! Food catalog repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Food item record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodItemRecord {
    pub id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: Decimal,
    pub serving_unit: String,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    pub fiber_g: Option<Decimal>,
    pub sugar_g: Option<Decimal>,
    pub sodium_mg: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Input for adding a food item to the catalog
#[derive(Debug, Clone)]
pub struct CreateFoodItem {
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: Decimal,
    pub serving_unit: String,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    pub fiber_g: Option<Decimal>,
    pub sugar_g: Option<Decimal>,
    pub sodium_mg: Option<i32>,
}

/// Food item repository
pub struct FoodItemRepository;

impl FoodItemRepository {
    /// Add a food item to the shared catalog
    pub async fn create(pool: &PgPool, input: CreateFoodItem) -> Result<FoodItemRecord> {
        let record = sqlx::query_as::<_, FoodItemRecord>(
            r#"
            INSERT INTO food_items (name, brand, serving_size, serving_unit, calories, protein_g, carbs_g, fat_g, fiber_g, sugar_g, sodium_mg)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, brand, serving_size, serving_unit, calories, protein_g, carbs_g, fat_g, fiber_g, sugar_g, sodium_mg, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.brand)
        .bind(input.serving_size)
        .bind(&input.serving_unit)
        .bind(input.calories)
        .bind(input.protein_g)
        .bind(input.carbs_g)
        .bind(input.fat_g)
        .bind(input.fiber_g)
        .bind(input.sugar_g)
        .bind(input.sodium_mg)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find a food item by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<FoodItemRecord>> {
        let record = sqlx::query_as::<_, FoodItemRecord>(
            r#"
            SELECT id, name, brand, serving_size, serving_unit, calories, protein_g, carbs_g, fat_g, fiber_g, sugar_g, sodium_mg, created_at
            FROM food_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Page through the catalog, name ascending
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<FoodItemRecord>> {
        let records = sqlx::query_as::<_, FoodItemRecord>(
            r#"
            SELECT id, name, brand, serving_size, serving_unit, calories, protein_g, carbs_g, fat_g, fiber_g, sugar_g, sodium_mg, created_at
            FROM food_items
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Replace a catalog entry
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: CreateFoodItem,
    ) -> Result<Option<FoodItemRecord>> {
        let record = sqlx::query_as::<_, FoodItemRecord>(
            r#"
            UPDATE food_items
            SET name = $2, brand = $3, serving_size = $4, serving_unit = $5, calories = $6,
                protein_g = $7, carbs_g = $8, fat_g = $9, fiber_g = $10, sugar_g = $11, sodium_mg = $12
            WHERE id = $1
            RETURNING id, name, brand, serving_size, serving_unit, calories, protein_g, carbs_g, fat_g, fiber_g, sugar_g, sodium_mg, created_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.brand)
        .bind(input.serving_size)
        .bind(&input.serving_unit)
        .bind(input.calories)
        .bind(input.protein_g)
        .bind(input.carbs_g)
        .bind(input.fat_g)
        .bind(input.fiber_g)
        .bind(input.sugar_g)
        .bind(input.sodium_mg)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Remove a catalog entry
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM food_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over name and brand
    pub async fn search(pool: &PgPool, query: &str, limit: i64) -> Result<Vec<FoodItemRecord>> {
        let pattern = format!("%{}%", query);
        let records = sqlx::query_as::<_, FoodItemRecord>(
            r#"
            SELECT id, name, brand, serving_size, serving_unit, calories, protein_g, carbs_g, fat_g, fiber_g, sugar_g, sodium_mg, created_at
            FROM food_items
            WHERE name ILIKE $1 OR brand ILIKE $1
            ORDER BY name ASC
            LIMIT $2
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
