//! Integration tests for goals, health metrics, and user stats endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_goal_and_list_active() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "title": "Run 100 km this month",
        "target_value": "100",
        "unit": "km",
        "deadline": "2024-06-30"
    });
    let (status, response) = app
        .post_auth("/api/v1/goals", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let goal: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(goal["status"], "active");
    assert_eq!(goal["current_value"], "0");

    let (status, response) = app.get_auth("/api/v1/goals", &token).await;
    assert_eq!(status, StatusCode::OK);
    let goals: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(goals.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_goal_progress_completes_at_target() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "title": "Bench 100 kg",
        "target_value": "100",
        "unit": "kg"
    });
    let (_, response) = app
        .post_auth("/api/v1/goals", &body.to_string(), &token)
        .await;
    let goal: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = goal["id"].as_str().unwrap();

    let progress = json!({ "current_value": "80" });
    let (status, response) = app
        .put_auth(
            &format!("/api/v1/goals/{}/progress", id),
            &progress.to_string(),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let goal: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(goal["status"], "active");

    let progress = json!({ "current_value": "100" });
    let (status, response) = app
        .put_auth(
            &format!("/api/v1/goals/{}/progress", id),
            &progress.to_string(),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let goal: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(goal["status"], "completed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_goal_negative_progress_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "title": "Swim 10 km",
        "target_value": "10",
        "unit": "km"
    });
    let (_, response) = app
        .post_auth("/api/v1/goals", &body.to_string(), &token)
        .await;
    let goal: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = goal["id"].as_str().unwrap();

    let progress = json!({ "current_value": "-5" });
    let (status, _) = app
        .put_auth(
            &format!("/api/v1/goals/{}/progress", id),
            &progress.to_string(),
            &token,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_goal() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "title": "Stretch daily",
        "target_value": "30",
        "unit": "days"
    });
    let (_, response) = app
        .post_auth("/api/v1/goals", &body.to_string(), &token)
        .await;
    let goal: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = goal["id"].as_str().unwrap();

    let (status, _) = app.delete_auth(&format!("/api/v1/goals/{}", id), &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, response) = app.get_auth("/api/v1/goals", &token).await;
    let goals: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(goals.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_metrics_empty_then_updated() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let (status, _) = app.get_auth("/api/v1/metrics", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body = json!({
        "resting_heart_rate": 52,
        "sleep_quality": 8
    });
    let (status, response) = app
        .put_auth("/api/v1/metrics", &body.to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let metrics: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(metrics["resting_heart_rate"], 52);
    assert_eq!(metrics["sleep_quality"], 8);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_metrics_update_without_fields_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let (status, _) = app.put_auth("/api/v1/metrics", "{}", &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_user_stats_default_to_zero() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let (status, response) = app.get_auth("/api/v1/stats", &token).await;

    assert_eq!(status, StatusCode::OK);
    let stats: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(stats["fitness_score"], 0);
    assert_eq!(stats["recovery_score"], 0);
    assert_eq!(stats["streak_days"], 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_user_stats_partial_update() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({ "fitness_score": 72 });
    let (status, response) = app
        .put_auth("/api/v1/stats", &body.to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let stats: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(stats["fitness_score"], 72);
    assert_eq!(stats["recovery_score"], 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_user_stats_score_out_of_range_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({ "recovery_score": 101 });
    let (status, _) = app
        .put_auth("/api/v1/stats", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
