// ── Wire record → domain conversion ──
//
// The API types mirror the JSON exactly; the domain types re-key the
// catch-all maps into sorted maps so downstream rendering is stable.

use std::collections::BTreeMap;

use vitrine_api::{BasicDetailsRecord, ConditionRecord, ProductRecord};

use crate::model::{BasicDetails, Condition, Product};

fn sorted(map: std::collections::HashMap<String, serde_json::Value>) -> BTreeMap<String, serde_json::Value> {
    map.into_iter().collect()
}

impl From<BasicDetailsRecord> for BasicDetails {
    fn from(rec: BasicDetailsRecord) -> Self {
        Self {
            brand: rec.brand,
            model: rec.model,
            color: rec.color,
            storage_gb: rec.storage,
            extra: sorted(rec.extra),
        }
    }
}

impl From<ConditionRecord> for Condition {
    fn from(rec: ConditionRecord) -> Self {
        Self {
            battery_health: rec.battery_health,
            extra: sorted(rec.extra),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(rec: ProductRecord) -> Self {
        Self {
            id: rec.id.into(),
            name: rec.name,
            brand: rec.brand,
            price: rec.price,
            images: rec.images,
            details: rec.basic_details.into(),
            condition: rec.condition.into(),
            extra: sorted(rec.extra),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn record_converts_field_for_field() {
        let json = serde_json::json!({
            "id": "dev-9",
            "name": "Pixel 7",
            "brand": "Google",
            "price": 2900.0,
            "images": ["https://cdn.example/p7.jpg"],
            "basicDetails": { "brand": "Google", "model": "Pixel 7", "color": "Obsidian", "storage": 128 },
            "condition": { "batteryHealth": "95%" }
        });
        let rec: ProductRecord = serde_json::from_value(json).unwrap();
        let product: Product = rec.into();

        assert_eq!(product.id.as_str(), "dev-9");
        assert_eq!(product.details.storage_gb, 128);
        assert_eq!(product.details.color.as_deref(), Some("Obsidian"));
        assert_eq!(product.condition.battery_health, "95%");
        assert_eq!(product.images.len(), 1);
    }
}
