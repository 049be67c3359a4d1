//! `catalog-client`
//!
//! **Responsibility:** client-side mirror of the product catalog for a UI.
//!
//! This crate provides:
//! - An HTTP transport for the `/api/products` endpoints
//! - A reducer-style state container holding the product list
//! - A store that reconciles local state with server responses
//!
//! The server remains the authority: local state only changes after the server
//! confirms a mutation.

pub mod api;
pub mod state;
pub mod store;

pub use api::{ClientError, HttpProductsApi, ProductsApi};
pub use state::{CatalogAction, CatalogState, reduce};
pub use store::{ActionResult, ProductStore};
