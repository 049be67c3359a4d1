use std::sync::RwLock;

use chrono::Utc;

use catalog_core::ProductId;
use catalog_products::{Product, ProductDraft, ProductPatch};

use super::r#trait::{DocumentStore, StoreError};

/// In-memory document store.
///
/// Intended for tests/dev. Documents are kept in insertion order, which is the
/// order `find_all` returns them in.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Product>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing documents (kept as given, ids included).
    pub fn with_documents(documents: Vec<Product>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        Ok(documents.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        Ok(documents.clone())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(ProductId::new(), draft, Utc::now());

        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        if documents.iter().any(|p| p.id == product.id) {
            return Err(StoreError::Backend(format!(
                "duplicate key: _id {}",
                product.id
            )));
        }
        documents.push(product.clone());
        Ok(product)
    }

    async fn find_by_id_and_delete(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        let removed = documents
            .iter()
            .position(|p| p.id == id)
            .map(|idx| documents.remove(idx));
        Ok(removed)
    }

    async fn find_by_id_and_update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        let Some(product) = documents.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.apply_patch(&patch, Utc::now());
        Ok(Some(product.clone()))
    }
}
