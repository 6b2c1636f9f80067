//! Integration tests for meal templates and insights endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn create_food(app: &common::TestApp, token: &str) -> String {
    let body = json!({
        "name": "Greek Yogurt",
        "serving_size": "170",
        "serving_unit": "g",
        "calories": 100,
        "protein_g": "17.3",
        "carbs_g": "6.1",
        "fat_g": "0.7"
    });
    let (status, response) = app
        .post_auth("/api/v1/nutrition/foods", &body.to_string(), token)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let food: serde_json::Value = serde_json::from_str(&response).unwrap();
    food["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_template_and_list() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();
    let food_id = create_food(&app, &token).await;

    let body = json!({
        "name": "Travel breakfast",
        "meal_type": "breakfast",
        "items": [{ "food_item_id": food_id, "quantity": "170" }]
    });
    let (status, response) = app
        .post_auth("/api/v1/templates", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let detail: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(detail["template"]["name"], "Travel breakfast");
    assert_eq!(detail["template"]["total_calories"], 100);
    assert_eq!(detail["items"].as_array().unwrap().len(), 1);

    let (status, response) = app.get_auth("/api/v1/templates", &token).await;
    assert_eq!(status, StatusCode::OK);
    let templates: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(templates.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_meal_from_template() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();
    let food_id = create_food(&app, &token).await;

    let body = json!({
        "name": "Recovery snack",
        "meal_type": "snack",
        "items": [{ "food_item_id": food_id, "quantity": "170" }]
    });
    let (_, response) = app
        .post_auth("/api/v1/templates", &body.to_string(), &token)
        .await;
    let detail: serde_json::Value = serde_json::from_str(&response).unwrap();
    let template_id = detail["template"]["id"].as_str().unwrap();

    let log = json!({ "eaten_on": "2024-06-05" });
    let (status, response) = app
        .post_auth(
            &format!("/api/v1/templates/{}/log", template_id),
            &log.to_string(),
            &token,
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let meal: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(meal["meal_type"], "snack");
    assert_eq!(meal["total_calories"], 100);

    let (_, response) = app
        .get_auth("/api/v1/nutrition/meals?date=2024-06-05", &token)
        .await;
    let meals: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(meals.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_template_of_other_user_not_found() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let other = app.create_test_user().await;
    let owner_token = owner.tokens.as_ref().unwrap().access_token.clone();
    let other_token = other.tokens.as_ref().unwrap().access_token.clone();
    let food_id = create_food(&app, &owner_token).await;

    let body = json!({
        "name": "Private template",
        "meal_type": "dinner",
        "items": [{ "food_item_id": food_id, "quantity": "170" }]
    });
    let (_, response) = app
        .post_auth("/api/v1/templates", &body.to_string(), &owner_token)
        .await;
    let detail: serde_json::Value = serde_json::from_str(&response).unwrap();
    let template_id = detail["template"]["id"].as_str().unwrap();

    let (status, _) = app
        .get_auth(&format!("/api/v1/templates/{}", template_id), &other_token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_template() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();
    let food_id = create_food(&app, &token).await;

    let body = json!({
        "name": "Short lived",
        "meal_type": "lunch",
        "items": [{ "food_item_id": food_id, "quantity": "100" }]
    });
    let (_, response) = app
        .post_auth("/api/v1/templates", &body.to_string(), &token)
        .await;
    let detail: serde_json::Value = serde_json::from_str(&response).unwrap();
    let template_id = detail["template"]["id"].as_str().unwrap();

    let (status, _) = app
        .delete_auth(&format!("/api/v1/templates/{}", template_id), &token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, response) = app.get_auth("/api/v1/templates", &token).await;
    let templates: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(templates.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_generate_insights_flags_low_hydration() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    // A single small entry keeps the trailing average under the floor
    let body = json!({ "amount_ml": 250 });
    app.post_auth("/api/v1/hydration", &body.to_string(), &token)
        .await;

    let (status, response) = app
        .post_auth("/api/v1/insights/generate", "{}", &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let insights: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(insights
        .as_array()
        .unwrap()
        .iter()
        .any(|i| i["title"] == "Drink more water"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_generate_insights_is_idempotent_per_day() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({ "amount_ml": 250 });
    app.post_auth("/api/v1/hydration", &body.to_string(), &token)
        .await;

    let (_, first) = app
        .post_auth("/api/v1/insights/generate", "{}", &token)
        .await;
    let (_, second) = app
        .post_auth("/api/v1/insights/generate", "{}", &token)
        .await;

    let first: serde_json::Value = serde_json::from_str(&first).unwrap();
    let second: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(
        first.as_array().unwrap().len(),
        second.as_array().unwrap().len()
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_mark_insight_read() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({ "amount_ml": 250 });
    app.post_auth("/api/v1/hydration", &body.to_string(), &token)
        .await;

    let (_, response) = app
        .post_auth("/api/v1/insights/generate", "{}", &token)
        .await;
    let insights: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = insights.as_array().unwrap()[0]["id"].as_str().unwrap();

    let (status, _) = app
        .put_auth(&format!("/api/v1/insights/{}/read", id), "{}", &token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, response) = app.get_auth("/api/v1/insights", &token).await;
    let insights: serde_json::Value = serde_json::from_str(&response).unwrap();
    let marked = insights
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == id)
        .unwrap();
    assert_eq!(marked["is_read"], true);
}
