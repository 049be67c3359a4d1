//! Products domain module.
//!
//! This crate contains the product document model, the presence rules applied
//! to create candidates, and the response envelope shared with clients. It is
//! plain domain logic (no IO, no HTTP, no storage).

pub mod envelope;
pub mod product;

pub use envelope::Envelope;
pub use product::{MISSING_FIELDS_MESSAGE, NewProduct, Product, ProductDraft, ProductPatch};
