//! Proxy routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::ProxyState;
use crate::error::{ClientError, ProxyError, ProxyResult};
use crate::models::{BearDataResponse, BearImageResponse, Comment, CommentInput, CommentVisibility};

/// Query parameters for `/api/bear-image`.
#[derive(Debug, Deserialize)]
pub struct ImageParams {
    #[serde(rename = "fileName")]
    file_name: Option<String>,
}

/// Create the proxy router.
pub fn create_router(state: Arc<ProxyState>) -> Router {
    let api = Router::new()
        .route("/bear-data", get(bear_data))
        .route("/bear-image", get(bear_image))
        .route("/comments", get(list_comments).post(add_comment))
        .route("/comments/visibility", get(comment_visibility).post(toggle_comments));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "ursid-wiki",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn bear_data(State(state): State<Arc<ProxyState>>) -> ProxyResult<Json<BearDataResponse>> {
    match state.client.fetch_wikitext(&state.page, state.section).await {
        Ok(wikitext) if !wikitext.is_empty() => Ok(Json(BearDataResponse { wikitext })),
        Ok(_) | Err(ClientError::MissingField(_)) => {
            tracing::warn!(page = %state.page, section = state.section, "No wikitext in response");
            Err(ProxyError::Upstream("Failed to fetch bear data."))
        }
        Err(e) => Err(ProxyError::Internal(e)),
    }
}

async fn bear_image(
    State(state): State<Arc<ProxyState>>,
    Query(params): Query<ImageParams>,
) -> ProxyResult<Json<BearImageResponse>> {
    let file_name = params
        .file_name
        .filter(|name| !name.is_empty())
        .ok_or(ProxyError::MissingParameter("file name"))?;

    tracing::debug!(file = %file_name, "Looking up image");

    match state.client.lookup_image_url(&file_name).await? {
        Some(image_url) => Ok(Json(BearImageResponse { image_url })),
        None => Err(ProxyError::NotFound("Image not found.")),
    }
}

/// Hidden boards list nothing.
async fn list_comments(State(state): State<Arc<ProxyState>>) -> Json<Vec<Comment>> {
    let board = state.comments.read().await;
    if board.is_visible() { Json(board.comments().to_vec()) } else { Json(Vec::new()) }
}

async fn add_comment(
    State(state): State<Arc<ProxyState>>,
    Json(input): Json<CommentInput>,
) -> ProxyResult<impl IntoResponse> {
    let mut board = state.comments.write().await;
    let added = board.submit(&input.name, &input.comment)?.clone();

    Ok((StatusCode::CREATED, Json(added)))
}

async fn comment_visibility(State(state): State<Arc<ProxyState>>) -> Json<CommentVisibility> {
    Json(state.comments.read().await.visibility())
}

async fn toggle_comments(State(state): State<Arc<ProxyState>>) -> Json<CommentVisibility> {
    let mut board = state.comments.write().await;
    let visible = board.toggle_visibility();
    tracing::debug!(visible, "Comment board toggled");
    Json(board.visibility())
}
