//! Wire-level response types for the catalog API.
//!
//! All types match the JSON returned by `GET /devices`. Field names use
//! camelCase via `#[serde(rename_all = "camelCase")]`. Fields the backend
//! adds without notice land in the `extra` maps instead of breaking decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One product as served by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    /// Image URLs in display order. Absent means no images.
    #[serde(default)]
    pub images: Vec<String>,
    pub basic_details: BasicDetailsRecord,
    pub condition: ConditionRecord,
    /// Catch-all for additional fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Nested `basicDetails` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicDetailsRecord {
    pub brand: String,
    pub model: String,
    /// Optional in practice; a missing color must not fail the decode.
    #[serde(default)]
    pub color: Option<String>,
    pub storage: u32,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Nested `condition` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    pub battery_health: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
