//! Shared types for the Stride storefront
//!
//! Common types used across the client and application crates: the product
//! model and size-label handling.

pub mod models;

// Re-exports
pub use models::{Product, split_size_labels};
pub use serde::{Deserialize, Serialize};
