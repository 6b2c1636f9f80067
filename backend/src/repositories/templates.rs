//! Meal template repository
//!
//! Templates capture a meal's items with their scaled macros so they
//! can be replayed onto new meals without recomputation.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Meal template record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealTemplateRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub meal_type: String,
    pub total_calories: i32,
    pub total_protein_g: Decimal,
    pub total_carbs_g: Decimal,
    pub total_fat_g: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Template item record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TemplateItemRecord {
    pub id: Uuid,
    pub template_id: Uuid,
    pub food_item_id: Uuid,
    pub quantity: Decimal,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// Item input with macros already scaled to the stored quantity
#[derive(Debug, Clone)]
pub struct NewTemplateItem {
    pub food_item_id: Uuid,
    pub quantity: Decimal,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// Input for saving a meal template
#[derive(Debug, Clone)]
pub struct CreateMealTemplate {
    pub user_id: Uuid,
    pub name: String,
    pub meal_type: String,
    pub items: Vec<NewTemplateItem>,
}

/// Meal template repository
pub struct MealTemplateRepository;

impl MealTemplateRepository {
    /// Save a template with its items atomically
    pub async fn create(pool: &PgPool, input: CreateMealTemplate) -> Result<MealTemplateRecord> {
        let total_calories: i32 = input.items.iter().map(|i| i.calories).sum();
        let total_protein: Decimal = input.items.iter().map(|i| i.protein_g).sum();
        let total_carbs: Decimal = input.items.iter().map(|i| i.carbs_g).sum();
        let total_fat: Decimal = input.items.iter().map(|i| i.fat_g).sum();

        let mut tx = pool.begin().await?;

        let template = sqlx::query_as::<_, MealTemplateRecord>(
            r#"
            INSERT INTO meal_templates (user_id, name, meal_type, total_calories, total_protein_g, total_carbs_g, total_fat_g)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, name, meal_type, total_calories, total_protein_g, total_carbs_g, total_fat_g, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.meal_type)
        .bind(total_calories)
        .bind(total_protein)
        .bind(total_carbs)
        .bind(total_fat)
        .fetch_one(&mut *tx)
        .await?;

        for item in &input.items {
            sqlx::query(
                r#"
                INSERT INTO meal_template_items (template_id, food_item_id, quantity, calories, protein_g, carbs_g, fat_g)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(template.id)
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

        Ok(template)
    }

    /// All of a user's templates, alphabetical
    pub async fn get_all(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealTemplateRecord>> {
        let records = sqlx::query_as::<_, MealTemplateRecord>(
            r#"
            SELECT id, user_id, name, meal_type, total_calories, total_protein_g, total_carbs_g, total_fat_g, created_at
            FROM meal_templates
            WHERE user_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a template by ID, scoped to its owner
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MealTemplateRecord>> {
        let record = sqlx::query_as::<_, MealTemplateRecord>(
            r#"
            SELECT id, user_id, name, meal_type, total_calories, total_protein_g, total_carbs_g, total_fat_g, created_at
            FROM meal_templates
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Items belonging to a template
    pub async fn get_items(pool: &PgPool, template_id: Uuid) -> Result<Vec<TemplateItemRecord>> {
        let records = sqlx::query_as::<_, TemplateItemRecord>(
            r#"
            SELECT id, template_id, food_item_id, quantity, calories, protein_g, carbs_g, fat_g
            FROM meal_template_items
            WHERE template_id = $1
            "#,
        )
        .bind(template_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete a template and its items
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM meal_templates WHERE id = $1 AND user_id = $2"#)
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
