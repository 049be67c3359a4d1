//! HTTP transport for the product endpoints.

use serde::de::DeserializeOwned;

use catalog_core::ProductId;
use catalog_products::{Envelope, NewProduct, Product, ProductPatch};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Message suitable for showing to a user: the server's own message for API
    /// errors, the full description otherwise.
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Product endpoints as seen by the client store.
///
/// Each call is one request; nothing is retried or deduplicated.
#[async_trait::async_trait]
pub trait ProductsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ClientError>;

    async fn create(&self, candidate: &NewProduct) -> Result<Product, ClientError>;

    /// Returns the server's confirmation message.
    async fn delete(&self, id: ProductId) -> Result<String, ClientError>;

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, ClientError>;
}

/// `reqwest`-backed implementation talking to a running API.
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    api_url: String,
    client: reqwest::Client,
}

impl HttpProductsApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL from `CATALOG_API_URL`, falling back to `http://localhost:5000`.
    pub fn from_env() -> Self {
        let api_url = std::env::var("CATALOG_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.api_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/api/products/{}", self.api_url, id)
    }

    /// Send a request and decode the envelope.
    ///
    /// Non-2xx answers become `ClientError::Api` carrying the server's message, or
    /// `fallback` when the body has none.
    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<Envelope<T>, ClientError> {
        let resp = req.send().await.map_err(|e| ClientError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|env| env.message)
                .unwrap_or_else(|| fallback.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

fn require_data<T>(env: Envelope<T>) -> Result<T, ClientError> {
    env.data
        .ok_or_else(|| ClientError::Parse("response envelope has no data".to_string()))
}

#[async_trait::async_trait]
impl ProductsApi for HttpProductsApi {
    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        let req = self.client.get(self.products_url());
        require_data(self.send(req, "Failed to fetch products").await?)
    }

    async fn create(&self, candidate: &NewProduct) -> Result<Product, ClientError> {
        let req = self.client.post(self.products_url()).json(candidate);
        require_data(self.send(req, "Failed to create product").await?)
    }

    async fn delete(&self, id: ProductId) -> Result<String, ClientError> {
        let req = self.client.delete(self.product_url(id));
        let env: Envelope<serde_json::Value> = self.send(req, "Failed to delete product").await?;
        Ok(env.message.unwrap_or_default())
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, ClientError> {
        let req = self.client.put(self.product_url(id)).json(patch);
        require_data(self.send(req, "Failed to update product").await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let api = HttpProductsApi::new("http://localhost:5000/");
        assert_eq!(api.api_url(), "http://localhost:5000");
        assert_eq!(api.products_url(), "http://localhost:5000/api/products");
    }

    #[test]
    fn api_errors_surface_the_server_message() {
        let err = ClientError::Api {
            status: 404,
            message: "Product not found".to_string(),
        };
        assert_eq!(err.message(), "Product not found");
        assert_eq!(err.to_string(), "API error (404): Product not found");

        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.message(), "network error: connection refused");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        // Grab a free port, then release it so nothing is listening there.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let api = HttpProductsApi::new(format!("http://{addr}"));
        match api.list().await {
            Err(ClientError::Network(_)) => {}
            other => panic!("expected Network error, got {other:?}"),
        }
    }
}
