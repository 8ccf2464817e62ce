//! End-to-end wiring demo against a live catalog API
//!
//! Usage: cargo run --example storefront -- http://localhost:7106/api

use std::sync::Arc;
use stride_app::catalog::{CatalogView, PriceBand};
use stride_app::detail::{AddToBagOutcome, DetailView};
use stride_app::store::{CatalogStore, spawn_load_effect};
use stride_client::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://localhost:7106/api".to_string());
    let client = Arc::new(ClientConfig::new(base_url).build_http_client());

    let store = Arc::new(CatalogStore::new());
    let _effect = spawn_load_effect(&store, client.clone());

    let mut catalog = CatalogView::new(&store);
    store.request_load();
    while catalog.loading() {
        catalog.changed().await?;
    }

    if let Some(error) = catalog.error() {
        tracing::error!(%error, "catalog failed to load");
        return Ok(());
    }
    tracing::info!(count = catalog.filtered().len(), "catalog loaded");

    catalog.toggle_price_band(PriceBand::Under50);
    tracing::info!(count = catalog.filtered().len(), "under $50");
    catalog.clear_all_filters();

    let Some(first) = catalog.filtered().first().cloned() else {
        tracing::info!("catalog is empty, nothing to inspect");
        return Ok(());
    };

    let mut detail = DetailView::new();
    detail.load(client.as_ref(), first.id).await;
    if let Some(size) = detail.size_options().first().cloned() {
        detail.select_size(&size);
    }

    match detail.submit_to_bag(client.as_ref()).await? {
        AddToBagOutcome::Confirmed { product_id, size } => {
            tracing::info!(product_id, %size, "added to bag");
        }
        AddToBagOutcome::Rejected(reason) => {
            tracing::info!(?reason, "add to bag rejected");
        }
    }

    Ok(())
}
