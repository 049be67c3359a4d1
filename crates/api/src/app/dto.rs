use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

pub use catalog_products::{Envelope, NewProduct, Product, ProductPatch};

/// Success response with a payload under `data`.
pub fn data_response<T: Serialize>(status: StatusCode, data: T) -> axum::response::Response {
    (status, Json(Envelope::data(data))).into_response()
}

/// Success response with only a `message`.
pub fn message_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(Envelope::<()>::message(message))).into_response()
}
