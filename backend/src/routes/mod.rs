//! Route definitions for the Nomadic Performance API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod caffeine;
mod contact;
mod goals;
mod health;
mod hydration;
mod insights;
mod metrics;
mod nutrition;
mod posts;
mod templates;
mod user_auth;
mod workouts;

#[cfg(test)]
mod posts_tests;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Nomadic Performance API v1" }))
        .merge(posts::post_routes())
        .merge(contact::contact_routes())
        .nest("/auth", user_auth::auth_routes())
        .nest("/workouts", workouts::workout_routes())
        .nest("/metrics", metrics::metrics_routes())
        .nest("/stats", metrics::stats_routes())
        .nest("/goals", goals::goal_routes())
        .nest("/nutrition", nutrition::nutrition_routes())
        .nest("/templates", templates::template_routes())
        .nest("/hydration", hydration::hydration_routes())
        .nest("/caffeine", caffeine::caffeine_routes())
        .nest("/insights", insights::insight_routes())
}
