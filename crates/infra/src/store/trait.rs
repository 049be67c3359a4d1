use std::sync::Arc;

use thiserror::Error;

use catalog_core::ProductId;
use catalog_products::{Product, ProductDraft, ProductPatch};

/// Document store failure.
///
/// None of these are retried; callers treat every variant as terminal for the
/// current request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store cannot be reached or its state is unusable (pool closed, lock poisoned).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored record could not be decoded into a `Product`.
    #[error("failed to decode stored document: {0}")]
    Decode(String),
}

/// Persistence collaborator holding product documents.
///
/// Every method is a single round-trip with per-record atomicity; there are no
/// multi-record transactions.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents, unfiltered, in store default (insertion) order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Persist a new document. The store assigns `_id`, `createdAt` and `updatedAt`.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Remove a document, returning it, or `None` if no document has this id.
    async fn find_by_id_and_delete(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Apply `patch` to a document and return the post-update document, or `None`
    /// if no document has this id.
    async fn find_by_id_and_update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError>;
}

#[async_trait::async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all().await
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).insert(draft).await
    }

    async fn find_by_id_and_delete(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id_and_delete(id).await
    }

    async fn find_by_id_and_update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id_and_update(id, patch).await
    }
}
