use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope used by the health check, the fallback route and error bodies.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Outcome of a catalog or order operation. Both variants render with
/// HTTP 200: a plain-text message or a JSON object.
#[derive(Debug, PartialEq)]
pub enum Reply<T> {
    Message(String),
    Json(T),
}

impl<T> Reply<T> {
    pub fn message(message: impl Into<String>) -> Self {
        Reply::Message(message.into())
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            Reply::Message(message) => Some(message),
            Reply::Json(_) => None,
        }
    }

    pub fn into_json(self) -> Option<T> {
        match self {
            Reply::Json(data) => Some(data),
            Reply::Message(_) => None,
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Reply::Message(message) => message.into_response(),
            Reply::Json(data) => Json(data).into_response(),
        }
    }
}
