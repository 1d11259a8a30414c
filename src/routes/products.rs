use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::products::{AttachColorsRequest, AttachSizesRequest, ProductRequest},
    error::AppResult,
    models::ProductDetail,
    response::Reply,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_product)).route(
        "/{id}",
        get(get_product).put(update_product).patch(update_product),
    )
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product created", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<Reply<()>> {
    product_service::create_product(&state, payload).await
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with attached color and size titles, or a plain-text not-found message", body = ProductDetail)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Reply<ProductDetail>> {
    product_service::get_product(&state, id).await
}

#[utoipa::path(
    method(put, patch),
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Update outcome message", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<Reply<()>> {
    product_service::update_product(&state, id, payload).await
}

#[utoipa::path(
    post,
    path = "/colors_on_product",
    request_body = AttachColorsRequest,
    responses(
        (status = 200, description = "Attachment outcome message", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn attach_colors(
    State(state): State<AppState>,
    Json(payload): Json<AttachColorsRequest>,
) -> AppResult<Reply<()>> {
    product_service::attach_colors(&state, payload).await
}

#[utoipa::path(
    post,
    path = "/sizes_on_product",
    request_body = AttachSizesRequest,
    responses(
        (status = 200, description = "Attachment outcome message", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn attach_sizes(
    State(state): State<AppState>,
    Json(payload): Json<AttachSizesRequest>,
) -> AppResult<Reply<()>> {
    product_service::attach_sizes(&state, payload).await
}
