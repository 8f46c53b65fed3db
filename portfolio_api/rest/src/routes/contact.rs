use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Response,
    routing, Router,
};
use portfolio_core_contact_contracts::{ContactSendMessageError, ContactService};
use portfolio_models::contact::ContactValidationError;

use super::{error, internal_server_error, success};
use crate::models::contact::ApiContactSubmission;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(send_message))
        .route("/api/contact/", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(err) => return internal_server_error(err),
    };

    let submission = match ApiContactSubmission::from_slice(&body) {
        Ok(submission) => submission,
        Err(err) if err.is_syntax() || err.is_eof() => {
            tracing::error!("Invalid JSON data in contact form submission: {err}");
            return error(StatusCode::BAD_REQUEST, "Invalid JSON data");
        }
        Err(err) => return internal_server_error(err),
    };

    match service.send_message(submission.into()).await {
        Ok(()) => success("Thank you for your message! I will get back to you soon."),
        Err(ContactSendMessageError::Validation(ContactValidationError::Required)) => {
            error(StatusCode::BAD_REQUEST, "All fields are required")
        }
        Err(ContactSendMessageError::Validation(ContactValidationError::InvalidEmail)) => {
            error(StatusCode::BAD_REQUEST, "Please enter a valid email address")
        }
        Err(ContactSendMessageError::Send) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send message. Please try again later.",
        ),
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
