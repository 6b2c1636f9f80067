//! Meal template service
//!
//! Templates store item macros as scaled at save time, so replaying a
//! template reproduces the same meal even if the catalog entry changes
//! later.

use crate::error::ApiError;
use crate::repositories::{
    CreateMeal, CreateMealTemplate, FoodItemRepository, MealRepository, MealTemplateRecord,
    MealTemplateRepository, NewMealItem, NewTemplateItem, TemplateItemRecord,
};
use crate::services::nutrition::scale_macros;
use chrono::NaiveDate;
use nomadic_performance_shared::types::{
    CreateMealTemplateRequest, MealItemResponse, MealResponse, MealTemplateDetailResponse,
    MealTemplateResponse,
};
use nomadic_performance_shared::validation::{validate_name, validate_quantity};
use sqlx::PgPool;
use uuid::Uuid;

/// Meal template service
pub struct TemplateService;

impl TemplateService {
    /// Save a named template from catalog items
    pub async fn create_template(
        pool: &PgPool,
        user_id: Uuid,
        request: CreateMealTemplateRequest,
    ) -> Result<MealTemplateDetailResponse, ApiError> {
        validate_name(&request.name, 200).map_err(ApiError::Validation)?;

        if request.items.is_empty() {
            return Err(ApiError::Validation(
                "A template needs at least one item".to_string(),
            ));
        }

        let mut items = Vec::with_capacity(request.items.len());
        for item in &request.items {
            let food_item_id = Uuid::parse_str(&item.food_item_id)
                .map_err(|_| ApiError::Validation("Invalid food item ID".to_string()))?;

            let food = FoodItemRepository::find_by_id(pool, food_item_id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| {
                    ApiError::NotFound(format!("Food item {} not found", food_item_id))
                })?;

            validate_quantity(item.quantity, food.serving_size).map_err(ApiError::Validation)?;

            let macros = scale_macros(&food, item.quantity);
            items.push(NewTemplateItem {
                food_item_id,
                quantity: item.quantity,
                calories: macros.calories,
                protein_g: macros.protein_g,
                carbs_g: macros.carbs_g,
                fat_g: macros.fat_g,
            });
        }

        let template = MealTemplateRepository::create(
            pool,
            CreateMealTemplate {
                user_id,
                name: request.name,
                meal_type: request.meal_type.as_str().to_string(),
                items,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        let items = MealTemplateRepository::get_items(pool, template.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::detail_response(template, items))
    }

    /// All of a user's templates, alphabetical
    pub async fn get_templates(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<MealTemplateResponse>, ApiError> {
        let records = MealTemplateRepository::get_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::template_response).collect())
    }

    /// A template with its items
    pub async fn get_template(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<MealTemplateDetailResponse, ApiError> {
        let template = MealTemplateRepository::find_by_id(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;

        let items = MealTemplateRepository::get_items(pool, template.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::detail_response(template, items))
    }

    /// Replay a template onto a new meal for the given day
    pub async fn log_from_template(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        eaten_on: NaiveDate,
    ) -> Result<MealResponse, ApiError> {
        let template = MealTemplateRepository::find_by_id(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;

        let items = MealTemplateRepository::get_items(pool, template.id)
            .await
            .map_err(ApiError::Internal)?;

        let meal = MealRepository::create(
            pool,
            CreateMeal {
                user_id,
                meal_type: template.meal_type.clone(),
                eaten_on,
                notes: Some(format!("From template: {}", template.name)),
                items: items
                    .iter()
                    .map(|i| NewMealItem {
                        food_item_id: i.food_item_id,
                        quantity: i.quantity,
                        calories: i.calories,
                        protein_g: i.protein_g,
                        carbs_g: i.carbs_g,
                        fat_g: i.fat_g,
                    })
                    .collect(),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        let meal_items = MealRepository::get_items(pool, meal.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(MealResponse {
            id: meal.id.to_string(),
            meal_type: meal.meal_type,
            eaten_on: meal.eaten_on,
            total_calories: meal.total_calories,
            total_protein_g: meal.total_protein_g,
            total_carbs_g: meal.total_carbs_g,
            total_fat_g: meal.total_fat_g,
            notes: meal.notes,
            items: meal_items.into_iter().map(Self::item_response).collect(),
        })
    }

    /// Delete a template
    pub async fn delete_template(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = MealTemplateRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Template not found".to_string()));
        }

        Ok(())
    }

    fn template_response(record: MealTemplateRecord) -> MealTemplateResponse {
        MealTemplateResponse {
            id: record.id.to_string(),
            name: record.name,
            meal_type: record.meal_type,
            total_calories: record.total_calories,
            total_protein_g: record.total_protein_g,
            total_carbs_g: record.total_carbs_g,
            total_fat_g: record.total_fat_g,
        }
    }

    fn item_response(item: crate::repositories::MealItemRecord) -> MealItemResponse {
        MealItemResponse {
            id: item.id.to_string(),
            food_item_id: item.food_item_id.to_string(),
            quantity: item.quantity,
            calories: item.calories,
            protein_g: item.protein_g,
            carbs_g: item.carbs_g,
            fat_g: item.fat_g,
        }
    }

    fn detail_response(
        template: MealTemplateRecord,
        items: Vec<TemplateItemRecord>,
    ) -> MealTemplateDetailResponse {
        MealTemplateDetailResponse {
            template: Self::template_response(template),
            items: items
                .into_iter()
                .map(|i| MealItemResponse {
                    id: i.id.to_string(),
                    food_item_id: i.food_item_id.to_string(),
                    quantity: i.quantity,
                    calories: i.calories,
                    protein_g: i.protein_g,
                    carbs_g: i.carbs_g,
                    fat_g: i.fat_g,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
