//! Stride Client - HTTP client for the catalog API
//!
//! Provides network-based HTTP calls to the product catalog backend.

pub mod config;
pub mod error;
pub mod http;
pub mod repository;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use repository::ProductRepository;

// Re-export shared types for convenience
pub use shared::Product;
