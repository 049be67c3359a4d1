//! Infrastructure layer: document store backends.

pub mod store;

pub use store::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore, StoreError};
