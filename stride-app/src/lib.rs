//! Stride App - storefront application state
//!
//! The catalog store (intent -> reducer -> subscription), its load effect,
//! in-memory catalog filtering, and the product detail view-model.

pub mod catalog;
pub mod detail;
pub mod store;

pub use catalog::{CatalogView, FilterCriteria, PriceBand};
pub use detail::{AddToBagOutcome, AddToBagRejection, DetailState, DetailView};
pub use store::{CatalogIntent, CatalogState, CatalogStore, spawn_load_effect};
