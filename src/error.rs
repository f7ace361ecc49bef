use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<pantry_shared::Error> for AppError {
    fn from(err: pantry_shared::Error) -> Self {
        match err {
            pantry_shared::Error::NotFound(_) => AppError::NotFound(err.to_string()),
            pantry_shared::Error::User(msg) => AppError::ValidationError(msg),
            pantry_shared::Error::Server(msg) => AppError::InternalError(msg),
            pantry_shared::Error::Unknown(e) => AppError::InternalError(format!("{e:?}")),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (
            status_code,
            Json(json!({ "success": false, "error": error_message })),
        )
            .into_response()
    }
}
