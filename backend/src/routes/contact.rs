//! Public contact and newsletter routes
//!
//! Submissions are relayed to external form endpoints and never
//! stored.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use nomadic_performance_shared::types::{ContactRequest, NewsletterRequest, RelayAck};

/// Create public relay routes
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(send_contact))
        .route("/newsletter", post(subscribe_newsletter))
}

/// POST /api/v1/contact
async fn send_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> ApiResult<Json<RelayAck>> {
    state.relay().send_contact(&req).await?;
    Ok(Json(RelayAck {
        status: "sent".to_string(),
    }))
}

/// POST /api/v1/newsletter
async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(req): Json<NewsletterRequest>,
) -> ApiResult<Json<RelayAck>> {
    state.relay().send_newsletter(&req).await?;
    Ok(Json(RelayAck {
        status: "subscribed".to_string(),
    }))
}
