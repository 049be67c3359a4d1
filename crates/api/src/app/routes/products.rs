//! Product resource handlers.
//!
//! Each handler performs at most one document store call. Identifier format is
//! checked before the store is touched; store failures are logged and reported
//! with a generic 500.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use catalog_core::{DomainError, ProductId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub const DELETED_MESSAGE: &str = "product deleted";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().find_all().await {
        Ok(products) => dto::data_response(StatusCode::OK, products),
        Err(e) => errors::store_error_to_response("list_products", e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::NewProduct>, JsonRejection>,
) -> axum::response::Response {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let draft = match candidate.validate() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store().insert(draft).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, "product created");
            dto::data_response(StatusCode::CREATED, product)
        }
        Err(e) => errors::store_error_to_response("create_product", e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store().find_by_id_and_delete(product_id).await {
        Ok(Some(_)) => {
            tracing::info!(%product_id, "product deleted");
            dto::message_response(StatusCode::OK, DELETED_MESSAGE)
        }
        Ok(None) => errors::domain_error_to_response(DomainError::not_found()),
        Err(e) => errors::store_error_to_response("delete_product", e),
    }
}

/// Partial update. The patch is not presence-validated (unlike create); a
/// well-formed id with no matching document answers 404.
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductPatch>, JsonRejection>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.store().find_by_id_and_update(product_id, patch).await {
        Ok(Some(product)) => dto::data_response(StatusCode::OK, product),
        Ok(None) => errors::domain_error_to_response(DomainError::not_found()),
        Err(e) => errors::store_error_to_response("update_product", e),
    }
}
