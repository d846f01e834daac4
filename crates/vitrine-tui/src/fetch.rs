//! Fetch task — connects the catalog client to the TUI action loop.
//!
//! One background task per load attempt: fetch the collection once,
//! convert, and report back through the action channel. A retry spawns a
//! fresh task; nothing cancels an in-flight fetch, so if a retry races a
//! stale response the last one to resolve wins. Acceptable at this scope
//! since the collection is replaced wholesale either way.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use vitrine_api::CatalogClient;
use vitrine_core::{CoreError, Product};

use crate::action::Action;

/// Spawn one fetch attempt against the catalog API.
pub fn spawn_fetch(client: Arc<CatalogClient>, action_tx: UnboundedSender<Action>) {
    tokio::spawn(async move {
        match client.list_devices().await {
            Ok(records) => {
                debug!(count = records.len(), "catalog fetched");
                let products: Vec<Product> = records.into_iter().map(Product::from).collect();
                let _ = action_tx.send(Action::ProductsLoaded(products));
            }
            Err(e) => {
                warn!(error = %e, "catalog fetch failed");
                let err: CoreError = e.into();
                let _ = action_tx.send(Action::FetchFailed(err.to_string()));
            }
        }
    });
}
