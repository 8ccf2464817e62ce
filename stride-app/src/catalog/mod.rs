//! Catalog grid: filtering and the subscribing view-model

pub mod filter;
pub mod view;

pub use filter::{CATEGORY_OPTIONS, COLOR_OPTIONS, FilterCriteria, PriceBand, SIZE_OPTIONS};
pub use view::CatalogView;
