//! Catalog grid view-model

use super::filter::{FilterCriteria, PriceBand};
use crate::store::{CatalogState, CatalogStore};
use shared::Product;
use std::sync::Arc;
use stride_client::ClientError;
use tokio::sync::watch;

/// Subscribes to the catalog store and maintains a locally derived filtered
/// subset, recomputed synchronously on every filter change and on every
/// observed store publication.
///
/// Dropping the view drops its subscription, so a load settling later cannot
/// update a disposed view.
pub struct CatalogView {
    state_rx: watch::Receiver<CatalogState>,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
}

impl CatalogView {
    /// Attach to a store, snapshotting its current state
    pub fn new(store: &CatalogStore) -> Self {
        let mut view = Self {
            state_rx: store.subscribe(),
            criteria: FilterCriteria::new(),
            filtered: Vec::new(),
        };
        view.refresh();
        view
    }

    /// Wait for the next store publication, then refilter
    ///
    /// Errors only when the store has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.state_rx.changed().await?;
        self.refresh();
        Ok(())
    }

    /// Recompute the filtered subset from the latest observed state
    pub fn refresh(&mut self) {
        let products = self.state_rx.borrow_and_update().products.clone();
        self.filtered = self.criteria.filter(&products);
    }

    // ========== Filter toggles ==========

    pub fn toggle_category(&mut self, category: &str) {
        self.criteria.toggle_category(category);
        self.refresh();
    }

    pub fn toggle_price_band(&mut self, band: PriceBand) {
        self.criteria.toggle_price_band(band);
        self.refresh();
    }

    pub fn toggle_size(&mut self, size: &str) {
        self.criteria.toggle_size(size);
        self.refresh();
    }

    pub fn toggle_color(&mut self, color: &str) {
        self.criteria.toggle_color(color);
        self.refresh();
    }

    pub fn toggle_on_sale(&mut self) {
        self.criteria.toggle_on_sale();
        self.refresh();
    }

    pub fn toggle_new_arrivals(&mut self) {
        self.criteria.toggle_new_arrivals();
        self.refresh();
    }

    /// Reset all criteria; the filtered view equals the full product list
    pub fn clear_all_filters(&mut self) {
        self.criteria.clear();
        self.refresh();
    }

    // ========== Derived views ==========

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn loading(&self) -> bool {
        self.state_rx.borrow().loading
    }

    pub fn error(&self) -> Option<Arc<ClientError>> {
        self.state_rx.borrow().error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogIntent;

    fn product(id: u32, description: &str, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: description.to_string(),
            price,
            image_url: None,
            sizes: vec!["8".to_string()],
        }
    }

    fn loaded_store() -> CatalogStore {
        let store = CatalogStore::new();
        let generation = store.request_load();
        store.dispatch(CatalogIntent::LoadSucceeded {
            generation,
            products: vec![
                product(1, "Running shoes", 40.0),
                product(2, "Basketball shoes", 60.0),
                product(3, "Running shoes", 160.0),
            ],
        });
        store
    }

    #[test]
    fn view_snapshots_current_products_on_attach() {
        let store = loaded_store();
        let view = CatalogView::new(&store);
        assert_eq!(view.filtered().len(), 3);
        assert!(!view.loading());
    }

    #[test]
    fn refresh_picks_up_later_publications() {
        let store = CatalogStore::new();
        let mut view = CatalogView::new(&store);
        assert!(view.filtered().is_empty());

        let generation = store.request_load();
        store.dispatch(CatalogIntent::LoadSucceeded {
            generation,
            products: vec![product(1, "Running shoes", 40.0)],
        });

        view.refresh();
        assert_eq!(view.filtered().len(), 1);
    }

    #[test]
    fn toggles_refilter_synchronously() {
        let store = loaded_store();
        let mut view = CatalogView::new(&store);

        view.toggle_category("Running");
        assert_eq!(view.filtered().len(), 2);

        view.toggle_price_band(PriceBand::Under50);
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(view.filtered()[0].id, 1);

        view.clear_all_filters();
        assert_eq!(view.filtered().len(), 3);
    }

    #[tokio::test]
    async fn changed_observes_the_next_publication() {
        let store = loaded_store();
        let mut view = CatalogView::new(&store);

        let generation = store.request_load();
        store.dispatch(CatalogIntent::LoadSucceeded {
            generation,
            products: vec![product(9, "Basketball shoes", 99.0)],
        });

        view.changed().await.unwrap();
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(view.filtered()[0].id, 9);
    }
}
