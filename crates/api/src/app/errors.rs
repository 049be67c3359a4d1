use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::DomainError;
use catalog_infra::StoreError;
use catalog_products::Envelope;

/// Generic message returned for every store failure; details stay in the logs.
pub const SERVER_ERROR_MESSAGE: &str = "server error";
pub const INVALID_ID_MESSAGE: &str = "invalid product id";
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

pub fn envelope_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(Envelope::<()>::failure(message))).into_response()
}

/// Log the underlying store error and answer 500 with the generic message.
pub fn store_error_to_response(operation: &'static str, err: StoreError) -> axum::response::Response {
    tracing::error!(operation, error = %err, "document store call failed");
    envelope_error(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => envelope_error(StatusCode::BAD_REQUEST, msg),
        DomainError::InvalidId(_) => envelope_error(StatusCode::NOT_FOUND, INVALID_ID_MESSAGE),
        DomainError::NotFound => envelope_error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
    }
}

/// Malformed JSON, wrong content type, or wrong field types: 400.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection, "rejected request body");
    envelope_error(StatusCode::BAD_REQUEST, rejection.body_text())
}
