//! Catalog store intents

use shared::Product;
use std::sync::Arc;
use stride_client::ClientError;

/// A named request to transition catalog state
///
/// `generation` ties a resolution back to the load request that produced it;
/// the reducer discards resolutions from superseded requests.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A catalog load was issued
    LoadRequested { generation: u64 },
    /// The load for `generation` resolved with the full catalog
    LoadSucceeded {
        generation: u64,
        products: Vec<Product>,
    },
    /// The load for `generation` failed
    LoadFailed {
        generation: u64,
        error: Arc<ClientError>,
    },
}
