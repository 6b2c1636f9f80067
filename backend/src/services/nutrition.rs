//! Nutrition service - food catalog, meal logging, and daily totals
//!
//! Item macros are scaled from the catalog serving: the multiplier is
//! `quantity / serving_size`, gram values round to two decimal places,
//! calories round to the nearest integer.

use crate::error::ApiError;
use crate::repositories::{
    CreateFoodItem, CreateMeal, FoodItemRecord, FoodItemRepository, MealItemRecord, MealRecord,
    MealRepository, NewMealItem, NutritionGoalRepository,
};
use chrono::NaiveDate;
use nomadic_performance_shared::types::{
    CreateMealRequest, DailyNutritionResponse, FoodItemInput, FoodItemResponse, MealItemResponse,
    MealResponse, NutritionGoalResponse, UpsertNutritionGoalRequest,
};
use nomadic_performance_shared::validation::{
    validate_calories, validate_macro_grams, validate_name, validate_quantity,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const DEFAULT_SEARCH_LIMIT: i64 = 20;
const MAX_SEARCH_LIMIT: i64 = 50;

/// Macros for one logged item, scaled to its quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledMacros {
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// Scale a food item's per-serving macros to a logged quantity
pub fn scale_macros(food: &FoodItemRecord, quantity: Decimal) -> ScaledMacros {
    let multiplier = quantity / food.serving_size;
    let calories = (Decimal::from(food.calories) * multiplier)
        .round()
        .to_i32()
        .unwrap_or(i32::MAX);

    ScaledMacros {
        calories,
        protein_g: (food.protein_g * multiplier).round_dp(2),
        carbs_g: (food.carbs_g * multiplier).round_dp(2),
        fat_g: (food.fat_g * multiplier).round_dp(2),
    }
}

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Add a food item to the catalog
    pub async fn create_food_item(
        pool: &PgPool,
        input: FoodItemInput,
    ) -> Result<FoodItemResponse, ApiError> {
        let input = Self::validated_food_input(input)?;

        let record = FoodItemRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::food_response(record))
    }

    /// Fetch one catalog entry
    pub async fn get_food_item(pool: &PgPool, id: Uuid) -> Result<FoodItemResponse, ApiError> {
        let record = FoodItemRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

        Ok(Self::food_response(record))
    }

    /// Page through the catalog, name ascending
    pub async fn list_food_items(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<FoodItemResponse>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let records = FoodItemRepository::list(pool, limit, offset)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::food_response).collect())
    }

    /// Replace a catalog entry
    pub async fn update_food_item(
        pool: &PgPool,
        id: Uuid,
        input: FoodItemInput,
    ) -> Result<FoodItemResponse, ApiError> {
        let input = Self::validated_food_input(input)?;

        let record = FoodItemRepository::update(pool, id, input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

        Ok(Self::food_response(record))
    }

    /// Remove a catalog entry
    pub async fn delete_food_item(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = FoodItemRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Food item not found".to_string()));
        }

        Ok(())
    }

    fn validated_food_input(input: FoodItemInput) -> Result<CreateFoodItem, ApiError> {
        validate_name(&input.name, 200).map_err(ApiError::Validation)?;
        validate_calories(input.calories).map_err(ApiError::Validation)?;

        if input.serving_size <= Decimal::ZERO {
            return Err(ApiError::Validation(
                "Serving size must be positive".to_string(),
            ));
        }
        for grams in [input.protein_g, input.carbs_g, input.fat_g] {
            validate_macro_grams(grams).map_err(ApiError::Validation)?;
        }

        Ok(CreateFoodItem {
            name: input.name,
            brand: input.brand,
            serving_size: input.serving_size,
            serving_unit: input.serving_unit,
            calories: input.calories,
            protein_g: input.protein_g,
            carbs_g: input.carbs_g,
            fat_g: input.fat_g,
            fiber_g: input.fiber_g,
            sugar_g: input.sugar_g,
            sodium_mg: input.sodium_mg,
        })
    }

    /// Search the food catalog by name or brand
    pub async fn search_foods(
        pool: &PgPool,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<FoodItemResponse>, ApiError> {
        if query.trim().is_empty() {
            return Err(ApiError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }

        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT);

        let records = FoodItemRepository::search(pool, query.trim(), limit)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::food_response).collect())
    }

    /// Log a meal from catalog items
    pub async fn log_meal(
        pool: &PgPool,
        user_id: Uuid,
        request: CreateMealRequest,
    ) -> Result<MealResponse, ApiError> {
        if request.items.is_empty() {
            return Err(ApiError::Validation(
                "A meal needs at least one item".to_string(),
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
            items.push(NewMealItem {
                food_item_id,
                quantity: item.quantity,
                calories: macros.calories,
                protein_g: macros.protein_g,
                carbs_g: macros.carbs_g,
                fat_g: macros.fat_g,
            });
        }

        let meal = MealRepository::create(
            pool,
            CreateMeal {
                user_id,
                meal_type: request.meal_type.as_str().to_string(),
                eaten_on: request.eaten_on,
                notes: request.notes,
                items,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        let items = MealRepository::get_items(pool, meal.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::meal_response(meal, items))
    }

    /// Meals eaten on a given day, with their items
    pub async fn get_meals_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<MealResponse>, ApiError> {
        let meals = MealRepository::get_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        let mut responses = Vec::with_capacity(meals.len());
        for meal in meals {
            let items = MealRepository::get_items(pool, meal.id)
                .await
                .map_err(ApiError::Internal)?;
            responses.push(Self::meal_response(meal, items));
        }

        Ok(responses)
    }

    /// Day totals across all meals
    pub async fn get_daily_summary(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyNutritionResponse, ApiError> {
        let row = MealRepository::get_daily_summary(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        Ok(DailyNutritionResponse {
            date,
            total_calories: row.total_calories,
            total_protein_g: row.total_protein_g,
            total_carbs_g: row.total_carbs_g,
            total_fat_g: row.total_fat_g,
            meal_count: row.meal_count,
        })
    }

    /// Delete a meal and its items
    pub async fn delete_meal(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = MealRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Meal not found".to_string()));
        }

        Ok(())
    }

    /// Get the user's daily macro targets
    pub async fn get_nutrition_goal(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<NutritionGoalResponse, ApiError> {
        let record = NutritionGoalRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("No nutrition goal set".to_string()))?;

        Ok(NutritionGoalResponse {
            daily_calories: record.daily_calories,
            daily_protein_g: record.daily_protein_g,
            daily_carbs_g: record.daily_carbs_g,
            daily_fat_g: record.daily_fat_g,
        })
    }

    /// Replace the user's daily macro targets
    pub async fn upsert_nutrition_goal(
        pool: &PgPool,
        user_id: Uuid,
        request: UpsertNutritionGoalRequest,
    ) -> Result<NutritionGoalResponse, ApiError> {
        validate_calories(request.daily_calories).map_err(ApiError::Validation)?;
        for grams in [
            request.daily_protein_g,
            request.daily_carbs_g,
            request.daily_fat_g,
        ] {
            validate_macro_grams(grams).map_err(ApiError::Validation)?;
        }

        let record = NutritionGoalRepository::upsert(
            pool,
            user_id,
            request.daily_calories,
            request.daily_protein_g,
            request.daily_carbs_g,
            request.daily_fat_g,
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(NutritionGoalResponse {
            daily_calories: record.daily_calories,
            daily_protein_g: record.daily_protein_g,
            daily_carbs_g: record.daily_carbs_g,
            daily_fat_g: record.daily_fat_g,
        })
    }

    fn food_response(record: FoodItemRecord) -> FoodItemResponse {
        FoodItemResponse {
            id: record.id.to_string(),
            name: record.name,
            brand: record.brand,
            serving_size: record.serving_size,
            serving_unit: record.serving_unit,
            calories: record.calories,
            protein_g: record.protein_g,
            carbs_g: record.carbs_g,
            fat_g: record.fat_g,
            fiber_g: record.fiber_g,
            sugar_g: record.sugar_g,
            sodium_mg: record.sodium_mg,
        }
    }

    fn meal_response(meal: MealRecord, items: Vec<MealItemRecord>) -> MealResponse {
        MealResponse {
            id: meal.id.to_string(),
            meal_type: meal.meal_type,
            eaten_on: meal.eaten_on,
            total_calories: meal.total_calories,
            total_protein_g: meal.total_protein_g,
            total_carbs_g: meal.total_carbs_g,
            total_fat_g: meal.total_fat_g,
            notes: meal.notes,
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
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn oats() -> FoodItemRecord {
        FoodItemRecord {
            id: Uuid::new_v4(),
            name: "Rolled Oats".to_string(),
            brand: None,
            serving_size: Decimal::from(100),
            serving_unit: "g".to_string(),
            calories: 389,
            protein_g: Decimal::new(169, 1),
            carbs_g: Decimal::new(663, 1),
            fat_g: Decimal::new(69, 1),
            fiber_g: None,
            sugar_g: None,
            sodium_mg: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn scale_full_serving_is_identity() {
        let food = oats();
        let macros = scale_macros(&food, Decimal::from(100));

        assert_eq!(macros.calories, 389);
        assert_eq!(macros.protein_g, Decimal::new(169, 1));
        assert_eq!(macros.carbs_g, Decimal::new(663, 1));
        assert_eq!(macros.fat_g, Decimal::new(69, 1));
    }

    #[test]
    fn scale_half_serving_halves_macros() {
        let food = oats();
        let macros = scale_macros(&food, Decimal::from(50));

        // 194.5 rounds to the even neighbour
        assert_eq!(macros.calories, 194);
        assert_eq!(macros.protein_g, Decimal::new(845, 2));
        assert_eq!(macros.carbs_g, Decimal::new(3315, 2));
        assert_eq!(macros.fat_g, Decimal::new(345, 2));
    }

    #[test]
    fn scale_rounds_grams_to_two_places() {
        let food = oats();
        let macros = scale_macros(&food, Decimal::from(33));

        // 16.9 * 0.33 = 5.577 -> 5.58
        assert_eq!(macros.protein_g, Decimal::new(558, 2));
        // 389 * 0.33 = 128.37 -> 128
        assert_eq!(macros.calories, 128);
    }

    #[test]
    fn scale_double_serving_doubles_calories() {
        let food = oats();
        let macros = scale_macros(&food, Decimal::from(200));

        assert_eq!(macros.calories, 778);
        assert_eq!(macros.fat_g, Decimal::new(138, 1));
    }

    fn catalog_item(calories: i32, serving: u32, protein: i64, carbs: i64, fat: i64) -> FoodItemRecord {
        FoodItemRecord {
            id: Uuid::new_v4(),
            name: "Test Food".to_string(),
            brand: None,
            serving_size: Decimal::from(serving),
            serving_unit: "g".to_string(),
            calories,
            // gram inputs arrive in tenths
            protein_g: Decimal::new(protein, 1),
            carbs_g: Decimal::new(carbs, 1),
            fat_g: Decimal::new(fat, 1),
            fiber_g: None,
            sugar_g: None,
            sodium_mg: None,
            created_at: Utc::now(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn full_serving_returns_catalog_macros(
            calories in 0i32..2000,
            serving in 1u32..1000,
            protein in 0i64..2000,
            carbs in 0i64..2000,
            fat in 0i64..2000,
        ) {
            let food = catalog_item(calories, serving, protein, carbs, fat);
            let macros = scale_macros(&food, food.serving_size);

            prop_assert_eq!(macros.calories, calories);
            prop_assert_eq!(macros.protein_g, Decimal::new(protein, 1));
            prop_assert_eq!(macros.carbs_g, Decimal::new(carbs, 1));
            prop_assert_eq!(macros.fat_g, Decimal::new(fat, 1));
        }

        #[test]
        fn scaled_calories_track_the_exact_ratio(
            calories in 1i32..2000,
            serving in 1u32..1000,
            quantity in 1u32..2000,
        ) {
            let food = catalog_item(calories, serving, 0, 0, 0);
            let macros = scale_macros(&food, Decimal::from(quantity));

            let exact = calories as f64 * quantity as f64 / serving as f64;
            prop_assert!(
                (macros.calories as f64 - exact).abs() <= 0.500001,
                "calories {} too far from exact {}",
                macros.calories,
                exact
            );
        }

        #[test]
        fn scaled_grams_track_the_exact_ratio(
            serving in 1u32..1000,
            quantity in 1u32..2000,
            protein in 0i64..2000,
        ) {
            let food = catalog_item(0, serving, protein, 0, 0);
            let macros = scale_macros(&food, Decimal::from(quantity));

            let exact = protein as f64 / 10.0 * quantity as f64 / serving as f64;
            let scaled = macros.protein_g.to_f64().unwrap();
            prop_assert!(
                (scaled - exact).abs() <= 0.0050001,
                "protein {} too far from exact {}",
                scaled,
                exact
            );
        }
    }
}
