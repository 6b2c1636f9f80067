//! Meal and nutrition goal repositories
//!
//! Meals are created together with their items in one transaction so
//! stored totals always match the item rows.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Meal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_type: String,
    pub eaten_on: NaiveDate,
    pub total_calories: i32,
    pub total_protein_g: Decimal,
    pub total_carbs_g: Decimal,
    pub total_fat_g: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Meal item record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealItemRecord {
    pub id: Uuid,
    pub meal_id: Uuid,
    pub food_item_id: Uuid,
    pub quantity: Decimal,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// Item input with macros already scaled to the logged quantity
#[derive(Debug, Clone)]
pub struct NewMealItem {
    pub food_item_id: Uuid,
    pub quantity: Decimal,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// Input for logging a meal with its items
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub user_id: Uuid,
    pub meal_type: String,
    pub eaten_on: NaiveDate,
    pub notes: Option<String>,
    pub items: Vec<NewMealItem>,
}

/// Per-day nutrition totals
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyNutritionRow {
    pub total_calories: i64,
    pub total_protein_g: Decimal,
    pub total_carbs_g: Decimal,
    pub total_fat_g: Decimal,
    pub meal_count: i64,
}

/// Meal repository
pub struct MealRepository;

impl MealRepository {
    /// Log a meal and its items atomically
    ///
    /// Meal totals are the sums of the item macros.
    pub async fn create(pool: &PgPool, input: CreateMeal) -> Result<MealRecord> {
        let total_calories: i32 = input.items.iter().map(|i| i.calories).sum();
        let total_protein: Decimal = input.items.iter().map(|i| i.protein_g).sum();
        let total_carbs: Decimal = input.items.iter().map(|i| i.carbs_g).sum();
        let total_fat: Decimal = input.items.iter().map(|i| i.fat_g).sum();

        let mut tx = pool.begin().await?;

        let meal = sqlx::query_as::<_, MealRecord>(
            r#"
            INSERT INTO meals (user_id, meal_type, eaten_on, total_calories, total_protein_g, total_carbs_g, total_fat_g, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, meal_type, eaten_on, total_calories, total_protein_g, total_carbs_g, total_fat_g, notes, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.meal_type)
        .bind(input.eaten_on)
        .bind(total_calories)
        .bind(total_protein)
        .bind(total_carbs)
        .bind(total_fat)
        .bind(&input.notes)
        .fetch_one(&mut *tx)
        .await?;

        for item in &input.items {
            sqlx::query(
                r#"
                INSERT INTO meal_items (meal_id, food_item_id, quantity, calories, protein_g, carbs_g, fat_g)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(meal.id)
            .bind(item.food_item_id)
            .bind(item.quantity)
            .bind(item.calories)
            .bind(item.protein_g)
            .bind(item.carbs_g)
            .bind(item.fat_g)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(meal)
    }

    /// Meals eaten on a given day, oldest first
    pub async fn get_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<MealRecord>> {
        let records = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, meal_type, eaten_on, total_calories, total_protein_g, total_carbs_g, total_fat_g, notes, created_at
            FROM meals
            WHERE user_id = $1 AND eaten_on = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a meal by ID, scoped to its owner
    pub async fn find_by_id(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<Option<MealRecord>> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, meal_type, eaten_on, total_calories, total_protein_g, total_carbs_g, total_fat_g, notes, created_at
            FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Items belonging to a meal
    pub async fn get_items(pool: &PgPool, meal_id: Uuid) -> Result<Vec<MealItemRecord>> {
        let records = sqlx::query_as::<_, MealItemRecord>(
            r#"
            SELECT id, meal_id, food_item_id, quantity, calories, protein_g, carbs_g, fat_g
            FROM meal_items
            WHERE meal_id = $1
            "#,
        )
        .bind(meal_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Day totals across all meals
    pub async fn get_daily_summary(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyNutritionRow> {
        let row = sqlx::query_as::<_, DailyNutritionRow>(
            r#"
            SELECT
                COALESCE(SUM(total_calories), 0)::bigint as total_calories,
                COALESCE(SUM(total_protein_g), 0) as total_protein_g,
                COALESCE(SUM(total_carbs_g), 0) as total_carbs_g,
                COALESCE(SUM(total_fat_g), 0) as total_fat_g,
                COUNT(*)::bigint as meal_count
            FROM meals
            WHERE user_id = $1 AND eaten_on = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Days where total protein met or beat the goal, over a trailing window
    pub async fn count_protein_goal_days(
        pool: &PgPool,
        user_id: Uuid,
        goal_protein_g: Decimal,
        days: i32,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)::bigint FROM (
                SELECT eaten_on
                FROM meals
                WHERE user_id = $1 AND eaten_on > CURRENT_DATE - $3::int
                GROUP BY eaten_on
                HAVING SUM(total_protein_g) >= $2
            ) met
            "#,
        )
        .bind(user_id)
        .bind(goal_protein_g)
        .bind(days)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Delete a meal and its items
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM meals WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Nutrition goal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NutritionGoalRecord {
    pub user_id: Uuid,
    pub daily_calories: i32,
    pub daily_protein_g: Decimal,
    pub daily_carbs_g: Decimal,
    pub daily_fat_g: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Nutrition goal repository
pub struct NutritionGoalRepository;

impl NutritionGoalRepository {
    /// Get the user's daily macro targets
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<NutritionGoalRecord>> {
        let record = sqlx::query_as::<_, NutritionGoalRecord>(
            r#"
            SELECT user_id, daily_calories, daily_protein_g, daily_carbs_g, daily_fat_g, updated_at
            FROM nutrition_goals
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Replace the user's daily macro targets
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        daily_calories: i32,
        daily_protein_g: Decimal,
        daily_carbs_g: Decimal,
        daily_fat_g: Decimal,
    ) -> Result<NutritionGoalRecord> {
        let record = sqlx::query_as::<_, NutritionGoalRecord>(
            r#"
            INSERT INTO nutrition_goals (user_id, daily_calories, daily_protein_g, daily_carbs_g, daily_fat_g)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                daily_calories = EXCLUDED.daily_calories,
                daily_protein_g = EXCLUDED.daily_protein_g,
                daily_carbs_g = EXCLUDED.daily_carbs_g,
                daily_fat_g = EXCLUDED.daily_fat_g,
                updated_at = NOW()
            RETURNING user_id, daily_calories, daily_protein_g, daily_carbs_g, daily_fat_g, updated_at
            "#,
        )
        .bind(user_id)
        .bind(daily_calories)
        .bind(daily_protein_g)
        .bind(daily_carbs_g)
        .bind(daily_fat_g)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
