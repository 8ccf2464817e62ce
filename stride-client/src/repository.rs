//! Repository seam over the catalog API
//!
//! The store effect and the detail view depend on this trait rather than on
//! `HttpClient` directly, so they can be driven against an in-memory fake.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::Product;

/// Read/write operations against the remote product catalog
///
/// Transport failures surface to the caller unchanged; implementations do
/// not retry.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// Fetch one product by identifier
    async fn get_product(&self, id: u32) -> ClientResult<Product>;

    /// Associate a product with the bag (response unused)
    async fn add_to_bag(&self, id: u32) -> ClientResult<()>;

    /// Associate a product with the favourites (response unused)
    async fn add_to_favourite(&self, id: u32) -> ClientResult<()>;
}

#[async_trait]
impl ProductRepository for HttpClient {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        HttpClient::list_products(self).await
    }

    async fn get_product(&self, id: u32) -> ClientResult<Product> {
        HttpClient::get_product(self, id).await
    }

    async fn add_to_bag(&self, id: u32) -> ClientResult<()> {
        HttpClient::add_to_bag(self, id).await
    }

    async fn add_to_favourite(&self, id: u32) -> ClientResult<()> {
        HttpClient::add_to_favourite(self, id).await
    }
}
