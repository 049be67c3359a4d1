use std::sync::Arc;

use anyhow::Context;

use catalog_infra::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore};

use crate::config::ApiConfig;

/// Shared state handed to every handler through an `Extension`.
///
/// Handlers are stateless; the only shared resource is the document store.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn DocumentStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Services backed by a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryDocumentStore::new()))
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

/// Pick the document store backend from configuration.
///
/// `DATABASE_URL` set means Postgres (the table is created if missing);
/// otherwise an in-memory store that is lost on restart.
pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresDocumentStore::connect(url)
                .await
                .context("failed to connect to Postgres document store")?;
            tracing::info!("using Postgres document store");
            Ok(AppServices::new(Arc::new(store)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory document store");
            Ok(AppServices::in_memory())
        }
    }
}
