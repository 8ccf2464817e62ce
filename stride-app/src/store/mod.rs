//! Catalog store: intent -> reducer -> subscription
//!
//! State is published through a watch channel (subscribers hold read-only
//! derived views and unsubscribe by dropping the receiver); dispatched
//! intents are rebroadcast on a separate channel so effects can react to
//! them. The store never fetches data itself - see [`effect`].

pub mod effect;
pub mod intent;
pub mod reducer;

pub use effect::spawn_load_effect;
pub use intent::CatalogIntent;
pub use reducer::{CatalogState, reduce};

use shared::Product;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use stride_client::ClientError;
use tokio::sync::{broadcast, watch};

const INTENT_CHANNEL_CAPACITY: usize = 32;

/// Holds the canonical catalog state, mutated only through [`reduce`]
pub struct CatalogStore {
    state_tx: watch::Sender<CatalogState>,
    intent_tx: broadcast::Sender<CatalogIntent>,
    next_generation: AtomicU64,
}

impl CatalogStore {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(CatalogState::default());
        let (intent_tx, _) = broadcast::channel(INTENT_CHANNEL_CAPACITY);
        Self {
            state_tx,
            intent_tx,
            next_generation: AtomicU64::new(0),
        }
    }

    /// Apply an intent to the state, then rebroadcast it to effects
    ///
    /// The reduction happens atomically with respect to other dispatches;
    /// subscribers never observe a torn state.
    pub fn dispatch(&self, intent: CatalogIntent) {
        tracing::debug!(?intent, "dispatch");
        self.state_tx
            .send_modify(|state| *state = reduce(state, &intent));
        // No effect subscribed yet is fine
        let _ = self.intent_tx.send(intent);
    }

    /// Issue a new load request, returning its generation
    pub fn request_load(&self) -> u64 {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;
        self.dispatch(CatalogIntent::LoadRequested { generation });
        generation
    }

    /// Subscribe to state publications; drop the receiver to unsubscribe
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to the intent stream
    ///
    /// Intents dispatched before subscribing are not replayed.
    pub fn intents(&self) -> broadcast::Receiver<CatalogIntent> {
        self.intent_tx.subscribe()
    }

    // ========== Derived views ==========

    /// Snapshot of the current state
    pub fn state(&self) -> CatalogState {
        self.state_tx.borrow().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state_tx.borrow().products.clone()
    }

    pub fn loading(&self) -> bool {
        self.state_tx.borrow().loading
    }

    pub fn error(&self) -> Option<Arc<ClientError>> {
        self.state_tx.borrow().error.clone()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
