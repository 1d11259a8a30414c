use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{patch, post},
};

use crate::{
    dto::variants::VariantRequest, error::AppResult, response::Reply,
    services::size_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_size))
        .route("/{id}", patch(update_size).put(update_size))
}

#[utoipa::path(
    post,
    path = "/size",
    request_body = VariantRequest,
    responses(
        (status = 200, description = "Size created", body = String, content_type = "text/plain")
    ),
    tag = "Sizes"
)]
pub async fn create_size(
    State(state): State<AppState>,
    Json(payload): Json<VariantRequest>,
) -> AppResult<Reply<()>> {
    size_service::create_size(&state, payload).await
}

#[utoipa::path(
    method(put, patch),
    path = "/size/{id}",
    params(
        ("id" = i32, Path, description = "Size ID")
    ),
    request_body = VariantRequest,
    responses(
        (status = 200, description = "Update outcome message", body = String, content_type = "text/plain")
    ),
    tag = "Sizes"
)]
pub async fn update_size(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VariantRequest>,
) -> AppResult<Reply<()>> {
    size_service::update_size(&state, id, payload).await
}
