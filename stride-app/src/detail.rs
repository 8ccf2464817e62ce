//! Product detail view-model
//!
//! Fetches a single product by identifier (bypassing the catalog store),
//! tracks a single-select size choice, and produces add-to-bag outcomes for
//! the caller to render.

use shared::Product;
use std::sync::Arc;
use stride_client::{ClientError, ClientResult, ProductRepository};

/// Detail page lifecycle
#[derive(Debug, Clone, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Loaded(Product),
    /// Fetch failed; explicit instead of loading forever
    Failed(Arc<ClientError>),
}

/// Why an add-to-bag attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToBagRejection {
    /// A size must be selected first
    NoSizeSelected,
    /// No product is loaded
    NotLoaded,
}

/// Outcome of an add-to-bag attempt, returned for the caller to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToBagOutcome {
    Confirmed { product_id: u32, size: String },
    Rejected(AddToBagRejection),
}

/// Detail page view-model
#[derive(Debug, Default)]
pub struct DetailView {
    state: DetailState,
    selected_size: Option<String>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the product, resetting any previous size selection
    pub async fn load(&mut self, repository: &dyn ProductRepository, id: u32) {
        self.state = DetailState::Loading;
        self.selected_size = None;

        self.state = match repository.get_product(id).await {
            Ok(product) => DetailState::Loaded(product),
            Err(error) => {
                tracing::warn!(%error, id, "product detail load failed");
                DetailState::Failed(Arc::new(error))
            }
        };
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Size labels of the loaded product (empty before a successful load)
    pub fn size_options(&self) -> &[String] {
        match &self.state {
            DetailState::Loaded(product) => &product.sizes,
            _ => &[],
        }
    }

    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    /// Single-select toggle: last click wins, clicking the selected size
    /// again deselects it. Labels the product does not offer are ignored.
    pub fn select_size(&mut self, size: &str) {
        if !self.size_options().iter().any(|label| label == size) {
            return;
        }
        if self.selected_size.as_deref() == Some(size) {
            self.selected_size = None;
        } else {
            self.selected_size = Some(size.to_owned());
        }
    }

    /// Attempt to add the loaded product to the bag
    ///
    /// Pure: no state change and no I/O. A rejection carries the reason for
    /// the caller to prompt with.
    pub fn add_to_bag(&self) -> AddToBagOutcome {
        let DetailState::Loaded(product) = &self.state else {
            return AddToBagOutcome::Rejected(AddToBagRejection::NotLoaded);
        };
        match &self.selected_size {
            Some(size) => AddToBagOutcome::Confirmed {
                product_id: product.id,
                size: size.clone(),
            },
            None => AddToBagOutcome::Rejected(AddToBagRejection::NoSizeSelected),
        }
    }

    /// Add-to-bag plus the fire-and-forget backend association
    ///
    /// A rejection makes no backend call; transport failures pass through
    /// unchanged.
    pub async fn submit_to_bag(
        &self,
        repository: &dyn ProductRepository,
    ) -> ClientResult<AddToBagOutcome> {
        let outcome = self.add_to_bag();
        if let AddToBagOutcome::Confirmed { product_id, .. } = &outcome {
            repository.add_to_bag(*product_id).await?;
        }
        Ok(outcome)
    }

    /// Favourite the loaded product (fire-and-forget, no selection needed)
    pub async fn submit_to_favourite(
        &self,
        repository: &dyn ProductRepository,
    ) -> ClientResult<()> {
        if let DetailState::Loaded(product) = &self.state {
            repository.add_to_favourite(product.id).await?;
        }
        Ok(())
    }
}
