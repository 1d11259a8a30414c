use axum::{Router, routing::post};

use crate::state::AppState;

pub mod auth;
pub mod colors;
pub mod doc;
pub mod health;
pub mod orders;
pub mod products;
pub mod sizes;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/products", products::router())
        .nest("/colors", colors::router())
        .nest("/size", sizes::router())
        .route("/colors_on_product", post(products::attach_colors))
        .route("/sizes_on_product", post(products::attach_sizes))
        .nest("/orders", orders::router())
}
