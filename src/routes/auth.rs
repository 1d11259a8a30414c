use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppResult,
    response::Reply,
    services::auth_service::{login_user, register_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration outcome message", body = String, content_type = "text/plain")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Reply<()>> {
    register_user(&state, payload).await
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login outcome message", body = String, content_type = "text/plain")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Reply<()>> {
    login_user(&state, payload).await
}
