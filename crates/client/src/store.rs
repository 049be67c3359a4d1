//! Product store: local list kept in step with the server.
//!
//! Every mutating method waits for the server before touching local state, and
//! leaves local state untouched on any failure.

use serde::Serialize;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product, ProductPatch};

use crate::api::{ClientError, ProductsApi};
use crate::state::{CatalogAction, CatalogState, reduce};

pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const FETCHED_MESSAGE: &str = "Products fetched";
pub const CREATED_MESSAGE: &str = "Product created successfully";
pub const UPDATED_MESSAGE: &str = "Product updated successfully";

/// Outcome reported back to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

fn failure(operation: &'static str, err: ClientError) -> ActionResult {
    tracing::warn!(operation, error = %err, "product request failed");
    ActionResult::failed(err.message())
}

/// State container owning the product list and the transport used to sync it.
///
/// Pass one instance through the UI layer; mutation requires `&mut self`, so two
/// calls can never interleave on the same store.
#[derive(Debug)]
pub struct ProductStore<A> {
    api: A,
    state: CatalogState,
}

impl<A: ProductsApi> ProductStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: CatalogState::default(),
        }
    }

    pub fn with_state(api: A, state: CatalogState) -> Self {
        Self { api, state }
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn dispatch(&mut self, action: CatalogAction) {
        self.state = reduce(&self.state, action);
    }

    /// Replace the list locally without talking to the server.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.dispatch(CatalogAction::Replace(products));
    }

    /// Replace the local list with the server's.
    pub async fn fetch_products(&mut self) -> ActionResult {
        match self.api.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "products fetched");
                self.dispatch(CatalogAction::Replace(products));
                ActionResult::ok(FETCHED_MESSAGE)
            }
            Err(e) => failure("fetch_products", e),
        }
    }

    /// Create on the server, then append the returned document.
    ///
    /// Candidates missing a field (zero price included) are refused locally
    /// without a request.
    pub async fn create_product(&mut self, candidate: NewProduct) -> ActionResult {
        if !candidate.missing_fields().is_empty() {
            return ActionResult::failed(FILL_ALL_FIELDS_MESSAGE);
        }

        match self.api.create(&candidate).await {
            Ok(product) => {
                self.dispatch(CatalogAction::Created(product));
                ActionResult::ok(CREATED_MESSAGE)
            }
            Err(e) => failure("create_product", e),
        }
    }

    pub async fn delete_product(&mut self, id: ProductId) -> ActionResult {
        match self.api.delete(id).await {
            Ok(message) => {
                self.dispatch(CatalogAction::Deleted(id));
                ActionResult::ok(message)
            }
            Err(e) => failure("delete_product", e),
        }
    }

    pub async fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> ActionResult {
        match self.api.update(id, &patch).await {
            Ok(product) => {
                self.dispatch(CatalogAction::Updated(id, product));
                ActionResult::ok(UPDATED_MESSAGE)
            }
            Err(e) => failure("update_product", e),
        }
    }
}
