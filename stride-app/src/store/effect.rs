//! Load effect: bridges the intent stream to the repository client

use super::{CatalogIntent, CatalogStore};
use std::sync::{Arc, Weak};
use stride_client::ProductRepository;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Spawn the catalog load effect
///
/// For every `LoadRequested` observed on the store's intent stream, the
/// effect calls `list_products` once and dispatches exactly one of
/// `LoadSucceeded`/`LoadFailed` carrying the request's generation. No
/// classification, no retry, no backoff.
///
/// Concurrent requests are neither deduplicated nor cancelled; each runs as
/// its own fetch task, and the reducer's generation guard discards whichever
/// resolutions arrive for superseded requests. The effect holds only a weak
/// reference to the store, so it exits once the store is dropped and a late
/// resolution never updates a disposed store.
pub fn spawn_load_effect(
    store: &Arc<CatalogStore>,
    repository: Arc<dyn ProductRepository>,
) -> JoinHandle<()> {
    let mut intents = store.intents();
    let store = Arc::downgrade(store);

    tokio::spawn(async move {
        loop {
            match intents.recv().await {
                Ok(CatalogIntent::LoadRequested { generation }) => {
                    let store = Weak::clone(&store);
                    let repository = Arc::clone(&repository);
                    tokio::spawn(async move {
                        let intent = match repository.list_products().await {
                            Ok(products) => {
                                tracing::info!(
                                    count = products.len(),
                                    generation,
                                    "catalog load succeeded"
                                );
                                CatalogIntent::LoadSucceeded {
                                    generation,
                                    products,
                                }
                            }
                            Err(error) => {
                                tracing::warn!(%error, generation, "catalog load failed");
                                CatalogIntent::LoadFailed {
                                    generation,
                                    error: Arc::new(error),
                                }
                            }
                        };
                        if let Some(store) = store.upgrade() {
                            store.dispatch(intent);
                        }
                    });
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "load effect lagged behind the intent stream");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
