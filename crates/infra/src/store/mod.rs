//! Document store boundary for product records.
//!
//! Handlers talk to a `DocumentStore`; the concrete backend (in-memory for
//! dev/tests, Postgres for persistence) is chosen at startup.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use r#trait::{DocumentStore, StoreError};
