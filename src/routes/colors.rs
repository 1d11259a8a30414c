use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{patch, post},
};

use crate::{
    dto::variants::VariantRequest, error::AppResult, response::Reply,
    services::color_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_color))
        .route("/{id}", patch(update_color).put(update_color))
}

#[utoipa::path(
    post,
    path = "/colors",
    request_body = VariantRequest,
    responses(
        (status = 200, description = "Color created", body = String, content_type = "text/plain")
    ),
    tag = "Colors"
)]
pub async fn create_color(
    State(state): State<AppState>,
    Json(payload): Json<VariantRequest>,
) -> AppResult<Reply<()>> {
    color_service::create_color(&state, payload).await
}

#[utoipa::path(
    method(put, patch),
    path = "/colors/{id}",
    params(
        ("id" = i32, Path, description = "Color ID")
    ),
    request_body = VariantRequest,
    responses(
        (status = 200, description = "Update outcome message", body = String, content_type = "text/plain")
    ),
    tag = "Colors"
)]
pub async fn update_color(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VariantRequest>,
) -> AppResult<Reply<()>> {
    color_service::update_color(&state, id, payload).await
}
