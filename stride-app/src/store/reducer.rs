//! Catalog state and its pure transition function

use super::intent::CatalogIntent;
use shared::Product;
use std::sync::Arc;
use stride_client::ClientError;

/// Canonical in-memory copy of the product catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Replaced wholesale on every successful load, never merged
    pub products: Vec<Product>,
    /// True only between a load request and its matching resolution
    pub loading: bool,
    /// Opaque last failure; cleared on every new request and on success
    pub error: Option<Arc<ClientError>>,
    /// Generation of the most recent load request
    pub generation: u64,
}

/// Pure transition function: `(state, intent) -> state`
///
/// The three load transitions are the only ones that exist. A resolution
/// whose generation does not match the state's is stale (a newer request
/// superseded it) and leaves the state unchanged.
pub fn reduce(state: &CatalogState, intent: &CatalogIntent) -> CatalogState {
    match intent {
        CatalogIntent::LoadRequested { generation } => CatalogState {
            products: state.products.clone(),
            loading: true,
            error: None,
            generation: *generation,
        },
        CatalogIntent::LoadSucceeded {
            generation,
            products,
        } if *generation == state.generation => CatalogState {
            products: products.clone(),
            loading: false,
            error: None,
            generation: state.generation,
        },
        CatalogIntent::LoadFailed { generation, error } if *generation == state.generation => {
            CatalogState {
                products: state.products.clone(),
                loading: false,
                error: Some(Arc::clone(error)),
                generation: state.generation,
            }
        }
        // Stale resolution
        _ => state.clone(),
    }
}
