// ── Product domain types ──

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque product identifier, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basic device details shown on cards and in the detail grid.
///
/// `color` is optional in the wild; everything a backend adds beyond the
/// modeled fields survives in `extra` (sorted so rendering is stable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicDetails {
    pub brand: String,
    pub model: String,
    pub color: Option<String>,
    pub storage_gb: u32,
    pub extra: BTreeMap<String, Value>,
}

/// Physical condition of the unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub battery_health: String,
    pub extra: BTreeMap<String, Value>,
}

/// The canonical catalog product. Immutable once converted from the wire
/// record; the store hands out `Arc<Product>` snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: f64,
    /// Image URLs in display order. May be empty.
    pub images: Vec<String>,
    pub details: BasicDetails,
    pub condition: Condition,
    pub extra: BTreeMap<String, Value>,
}
