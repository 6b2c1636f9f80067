//! Public blog routes
//!
//! Posts are loaded at startup and served from memory, so these
//! handlers never touch the database.

use crate::content::{Post, PostMeta};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Create public post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/:slug", get(get_post))
        .route("/posts/tag/:tag", get(posts_by_tag))
}

/// GET /api/v1/posts
async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostMeta>> {
    Json(state.posts().list().into_iter().cloned().collect())
}

/// GET /api/v1/posts/:slug
async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Post>> {
    state
        .posts()
        .get(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No post with slug '{}'", slug)))
}

/// GET /api/v1/posts/tag/:tag
async fn posts_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Json<Vec<PostMeta>> {
    Json(state.posts().by_tag(&tag).into_iter().cloned().collect())
}
