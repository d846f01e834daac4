// vitrine-api: Async Rust client for the Vitrine catalog API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::CatalogClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{BasicDetailsRecord, ConditionRecord, ProductRecord};
