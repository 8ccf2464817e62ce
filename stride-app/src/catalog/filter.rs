//! Catalog Filter
//!
//! Pure predicate logic for the catalog grid: a product passes if ALL
//! enabled criteria groups match (AND across groups, OR within a group).

use shared::Product;
use std::collections::BTreeSet;
use std::fmt;

/// Category options offered by the catalog page
pub const CATEGORY_OPTIONS: [&str; 3] = ["Training & Gym", "Running", "Basketball"];

/// Size options offered by the catalog page
pub const SIZE_OPTIONS: [&str; 6] = ["7", "8", "9", "10", "11", "12"];

/// Color options offered by the catalog page
pub const COLOR_OPTIONS: [&str; 4] = ["Black", "White", "Red", "Blue"];

/// The catalog carries no sale attribute; prices under this ceiling count
/// as on sale
const ON_SALE_PRICE_CEILING: f64 = 130.0;

/// Low identifiers stand in for new arrivals
const NEW_ARRIVAL_MAX_ID: u32 = 3;

/// Fixed price interval used for filtering
///
/// Boundary prices (50, 100, 150) belong to both adjacent closed bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceBand {
    Under50,
    From50To100,
    From100To150,
    Over150,
}

impl PriceBand {
    /// All bands, in display order
    pub const ALL: [PriceBand; 4] = [
        PriceBand::Under50,
        PriceBand::From50To100,
        PriceBand::From100To150,
        PriceBand::Over150,
    ];

    /// Whether a price falls inside this band
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBand::Under50 => price < 50.0,
            PriceBand::From50To100 => (50.0..=100.0).contains(&price),
            PriceBand::From100To150 => (100.0..=150.0).contains(&price),
            PriceBand::Over150 => price > 150.0,
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceBand::Under50 => "Under $50",
            PriceBand::From50To100 => "$50 - $100",
            PriceBand::From100To150 => "$100 - $150",
            PriceBand::Over150 => "Over $150",
        };
        f.write_str(label)
    }
}

/// Multi-select filter criteria for the catalog grid
///
/// View-local state: never persisted in the store. Each toggle adds or
/// removes a single value; [`clear`](Self::clear) resets everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    categories: BTreeSet<String>,
    price_bands: BTreeSet<PriceBand>,
    sizes: BTreeSet<String>,
    colors: BTreeSet<String>,
    on_sale: bool,
    new_arrivals: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle(set: &mut BTreeSet<String>, value: &str) {
        if !set.remove(value) {
            set.insert(value.to_owned());
        }
    }

    pub fn toggle_category(&mut self, category: &str) {
        Self::toggle(&mut self.categories, category);
    }

    pub fn toggle_price_band(&mut self, band: PriceBand) {
        if !self.price_bands.remove(&band) {
            self.price_bands.insert(band);
        }
    }

    pub fn toggle_size(&mut self, size: &str) {
        Self::toggle(&mut self.sizes, size);
    }

    pub fn toggle_color(&mut self, color: &str) {
        Self::toggle(&mut self.colors, color);
    }

    pub fn toggle_on_sale(&mut self) {
        self.on_sale = !self.on_sale;
    }

    pub fn toggle_new_arrivals(&mut self) {
        self.new_arrivals = !self.new_arrivals;
    }

    /// Reset every criterion; filtering becomes the identity
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion is enabled
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.price_bands.is_empty()
            && self.sizes.is_empty()
            && self.colors.is_empty()
            && !self.on_sale
            && !self.new_arrivals
    }

    // ========== Selected state ==========

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn selected_price_bands(&self) -> &BTreeSet<PriceBand> {
        &self.price_bands
    }

    pub fn selected_sizes(&self) -> &BTreeSet<String> {
        &self.sizes
    }

    pub fn selected_colors(&self) -> &BTreeSet<String> {
        &self.colors
    }

    pub fn on_sale(&self) -> bool {
        self.on_sale
    }

    pub fn new_arrivals(&self) -> bool {
        self.new_arrivals
    }

    // ========== Predicate ==========

    /// Whether a product passes every enabled criteria group
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty()
            && !contains_any_ci(&product.description, &self.categories)
        {
            return false;
        }

        if !self.price_bands.is_empty()
            && !self.price_bands.iter().any(|band| band.contains(product.price))
        {
            return false;
        }

        if !self.sizes.is_empty()
            && !self
                .sizes
                .iter()
                .any(|size| product.sizes.iter().any(|label| label == size))
        {
            return false;
        }

        // Products carry no structured color attribute; colors match the
        // description the same way categories do
        if !self.colors.is_empty() && !contains_any_ci(&product.description, &self.colors) {
            return false;
        }

        if self.on_sale && product.price >= ON_SALE_PRICE_CEILING {
            return false;
        }

        if self.new_arrivals && product.id > NEW_ARRIVAL_MAX_ID {
            return false;
        }

        true
    }

    /// Apply the predicate over a product list
    ///
    /// Synchronous full rescan; no incremental update.
    pub fn filter(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

/// Case-insensitive "haystack contains at least one needle as substring"
fn contains_any_ci(haystack: &str, needles: &BTreeSet<String>) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}
