use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiSuccess};

pub mod contact;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("Unexpected error in contact form: {err:#}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred. Please try again.",
    )
}

fn success(message: &'static str) -> Response {
    Json(ApiSuccess {
        success: true,
        message,
    })
    .into_response()
}

fn error(code: StatusCode, error: &'static str) -> Response {
    (
        code,
        Json(ApiError {
            success: false,
            error,
        }),
    )
        .into_response()
}
