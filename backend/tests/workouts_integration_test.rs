//! Integration tests for workout tracking endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_workout_requires_auth() {
    let app = common::TestApp::new().await;

    let body = json!({
        "workout_type": "run",
        "duration_minutes": 30,
        "intensity": "medium"
    });
    let (status, _) = app.post("/api/v1/workouts", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_workout_success() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "workout_type": "strength",
        "duration_minutes": 45,
        "intensity": "high",
        "notes": "Hotel gym, dumbbells only"
    });
    let (status, response) = app
        .post_auth("/api/v1/workouts", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::CREATED);

    let workout: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(workout["workout_type"], "strength");
    assert_eq!(workout["duration_minutes"], 45);
    assert_eq!(workout["intensity"], "high");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_workout_zero_duration_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "workout_type": "run",
        "duration_minutes": 0,
        "intensity": "low"
    });
    let (status, _) = app
        .post_auth("/api/v1/workouts", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_recent_workouts_newest_first() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    for (workout_type, completed_at) in [
        ("run", "2024-06-01T08:00:00Z"),
        ("strength", "2024-06-02T08:00:00Z"),
    ] {
        let body = json!({
            "workout_type": workout_type,
            "duration_minutes": 30,
            "intensity": "medium",
            "completed_at": completed_at
        });
        let (status, _) = app
            .post_auth("/api/v1/workouts", &body.to_string(), &token)
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, response) = app.get_auth("/api/v1/workouts", &token).await;
    assert_eq!(status, StatusCode::OK);

    let workouts: serde_json::Value = serde_json::from_str(&response).unwrap();
    let workouts = workouts.as_array().unwrap();
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0]["workout_type"], "strength");
    assert_eq!(workouts[1]["workout_type"], "run");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_recent_workouts_respects_limit() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    for _ in 0..3 {
        let body = json!({
            "workout_type": "run",
            "duration_minutes": 20,
            "intensity": "low"
        });
        app.post_auth("/api/v1/workouts", &body.to_string(), &token)
            .await;
    }

    let (status, response) = app.get_auth("/api/v1/workouts?limit=2", &token).await;
    assert_eq!(status, StatusCode::OK);

    let workouts: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(workouts.as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_weekly_stats_counts_trailing_window() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "workout_type": "cycling",
        "duration_minutes": 60,
        "intensity": "medium"
    });
    app.post_auth("/api/v1/workouts", &body.to_string(), &token)
        .await;

    let (status, response) = app.get_auth("/api/v1/workouts/weekly", &token).await;
    assert_eq!(status, StatusCode::OK);

    let stats: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(stats["workout_count"], 1);
    assert_eq!(stats["total_minutes"], 60);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_workout() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = user.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "workout_type": "yoga",
        "duration_minutes": 25,
        "intensity": "low"
    });
    let (_, response) = app
        .post_auth("/api/v1/workouts", &body.to_string(), &token)
        .await;
    let workout: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = workout["id"].as_str().unwrap();

    let (status, _) = app
        .delete_auth(&format!("/api/v1/workouts/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deleting again is a 404
    let (status, _) = app
        .delete_auth(&format!("/api/v1/workouts/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_workout_of_other_user_not_found() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let other = app.create_test_user().await;
    let owner_token = owner.tokens.as_ref().unwrap().access_token.clone();
    let other_token = other.tokens.as_ref().unwrap().access_token.clone();

    let body = json!({
        "workout_type": "run",
        "duration_minutes": 30,
        "intensity": "medium"
    });
    let (_, response) = app
        .post_auth("/api/v1/workouts", &body.to_string(), &owner_token)
        .await;
    let workout: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = workout["id"].as_str().unwrap();

    let (status, _) = app
        .delete_auth(&format!("/api/v1/workouts/{}", id), &other_token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
