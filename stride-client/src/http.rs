//! HTTP client for the product catalog API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::Product;

/// HTTP client for making network requests to the catalog backend
///
/// Every operation is a single round trip: no retries, no caching, no
/// timeout handling beyond the configured request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Make a GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with an empty body, discarding the response body
    async fn post_empty(&self, path: &str) -> ClientResult<()> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, %status, "request failed");
            return Err(Self::status_error(status, body));
        }

        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "request failed");
            return Err(Self::status_error(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    fn status_error(status: StatusCode, body: String) -> ClientError {
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            _ => ClientError::Status { status, body },
        }
    }

    // ========== Products API ==========

    /// Fetch the full product catalog
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get("Products").await
    }

    /// Fetch a single product by identifier
    pub async fn get_product(&self, id: u32) -> ClientResult<Product> {
        self.get::<Product>(&format!("Products/{id}"))
            .await
            .map_err(|err| match err {
                ClientError::NotFound(_) => ClientError::NotFound(format!("product {id}")),
                other => other,
            })
    }

    /// Add a product to the bag (fire-and-forget stub)
    pub async fn add_to_bag(&self, id: u32) -> ClientResult<()> {
        self.post_empty(&format!("Products/{id}/bag")).await
    }

    /// Add a product to the favourites (fire-and-forget stub)
    pub async fn add_to_favourite(&self, id: u32) -> ClientResult<()> {
        self.post_empty(&format!("Products/{id}/favourite")).await
    }
}
