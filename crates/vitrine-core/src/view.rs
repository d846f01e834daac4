// ── Render view-models ──
//
// Pure mappings from domain data to display structure. Nothing here
// touches a terminal; the TUI crate turns these into widgets, which keeps
// every formatting rule testable in isolation.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::model::{Product, ProductId};

/// Fixed currency suffix used everywhere a price shows.
pub const CURRENCY_SUFFIX: &str = "DH";

/// Glyph standing in for a missing or broken product image.
pub const IMAGE_PLACEHOLDER: &str = "▯";

/// Shown where an optional field has no value.
pub const ABSENT: &str = "—";

/// One displayable product image. A URL that does not parse degrades to
/// the placeholder for that image only; it never aborts the render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Url(String),
    Placeholder,
}

impl CardImage {
    pub fn from_source(source: Option<&str>) -> Self {
        match source {
            Some(raw) if Url::parse(raw).is_ok() => Self::Url(raw.to_owned()),
            _ => Self::Placeholder,
        }
    }

    /// Compact label for a terminal cell: the URL's final path segment,
    /// or the placeholder glyph.
    pub fn label(&self) -> String {
        match self {
            Self::Placeholder => IMAGE_PLACEHOLDER.to_owned(),
            Self::Url(raw) => Url::parse(raw)
                .ok()
                .and_then(|u| {
                    u.path_segments()
                        .and_then(|mut segs| segs.next_back().map(str::to_owned))
                })
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| raw.clone()),
        }
    }
}

/// `"{price} DH"` with a trailing-zero-free price.
pub fn price_label(price: f64) -> String {
    format!("{price} {CURRENCY_SUFFIX}")
}

/// Generic key→label rule: a space before each internal uppercase
/// letter, first character capitalized (`batteryHealth` → "Battery
/// Health").
pub fn format_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}

/// Generic value rendering for the spec grid: booleans become Yes/No,
/// strings shed their quotes, everything else uses its JSON form.
pub fn spec_value(value: &Value) -> String {
    match value {
        Value::Bool(true) => "Yes".into(),
        Value::Bool(false) => "No".into(),
        Value::String(s) => s.clone(),
        Value::Null => ABSENT.into(),
        other => other.to_string(),
    }
}

/// One label/value row of a spec grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

impl SpecRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

// ── Card view ────────────────────────────────────────────────────────

/// Everything a product card displays, keyed by product id for the
/// order/details actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub brand_initial: char,
    pub brand: String,
    pub name: String,
    pub image: CardImage,
    pub storage_label: String,
    pub battery_label: String,
    pub color_label: String,
    pub price_label: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            brand_initial: product.brand.chars().next().unwrap_or('?'),
            brand: product.brand.clone(),
            name: product.name.clone(),
            image: CardImage::from_source(product.images.first().map(String::as_str)),
            storage_label: format!("{} GB", product.details.storage_gb),
            battery_label: product.condition.battery_health.clone(),
            color_label: product
                .details
                .color
                .clone()
                .unwrap_or_else(|| ABSENT.into()),
            price_label: price_label(product.price),
        }
    }
}

// ── Detail view ──────────────────────────────────────────────────────

/// A similar-product row: model, price, and a details action only.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarCard {
    pub id: ProductId,
    pub model: String,
    pub price_label: String,
}

/// Everything the detail overlay displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: ProductId,
    pub title: String,
    pub images: Vec<CardImage>,
    pub price_label: String,
    pub specs: Vec<SpecRow>,
    pub similar: Vec<SimilarCard>,
}

impl DetailView {
    pub fn build(product: &Product, similar: &[Arc<Product>]) -> Self {
        let mut specs = vec![
            SpecRow::new(format_key("model"), product.details.model.clone()),
            SpecRow::new(
                format_key("color"),
                product.details.color.clone().unwrap_or_else(|| ABSENT.into()),
            ),
            SpecRow::new(
                format_key("storage"),
                format!("{} GB", product.details.storage_gb),
            ),
            SpecRow::new(
                format_key("batteryHealth"),
                product.condition.battery_health.clone(),
            ),
        ];

        // Generic fallback for whatever else the backend sent along.
        for (key, value) in product.details.extra.iter().chain(&product.condition.extra) {
            specs.push(SpecRow::new(format_key(key), spec_value(value)));
        }

        Self {
            id: product.id.clone(),
            title: format!("{} {}", product.brand, product.details.model),
            images: product
                .images
                .iter()
                .map(|src| CardImage::from_source(Some(src)))
                .collect(),
            price_label: price_label(product.price),
            specs,
            similar: similar
                .iter()
                .map(|p| SimilarCard {
                    id: p.id.clone(),
                    model: p.details.model.clone(),
                    price_label: price_label(p.price),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::store::tests::product;

    #[test]
    fn format_key_splits_camel_case() {
        assert_eq!(format_key("batteryHealth"), "Battery Health");
        assert_eq!(format_key("model"), "Model");
        assert_eq!(format_key("screenGradeAB"), "Screen Grade A B");
        assert_eq!(format_key(""), "");
    }

    #[test]
    fn spec_value_renders_booleans_as_yes_no() {
        assert_eq!(spec_value(&serde_json::json!(true)), "Yes");
        assert_eq!(spec_value(&serde_json::json!(false)), "No");
        assert_eq!(spec_value(&serde_json::json!("A")), "A");
        assert_eq!(spec_value(&serde_json::json!(42)), "42");
        assert_eq!(spec_value(&serde_json::Value::Null), ABSENT);
    }

    #[test]
    fn price_label_is_consistent_everywhere() {
        assert_eq!(price_label(3400.0), "3400 DH");
        assert_eq!(price_label(3400.5), "3400.5 DH");
    }

    #[test]
    fn card_carries_brand_initial_and_fallbacks() {
        let mut p = product("a", "iPhone 12", "Apple", None);
        p.images.clear();
        let card = ProductCard::from_product(&p);

        assert_eq!(card.brand_initial, 'A');
        assert_eq!(card.image, CardImage::Placeholder);
        assert_eq!(card.color_label, ABSENT);
        assert_eq!(card.storage_label, "128 GB");
        assert_eq!(card.price_label, "1000 DH");
    }

    #[test]
    fn bad_image_url_degrades_to_placeholder_per_image() {
        assert_eq!(CardImage::from_source(Some("not a url")), CardImage::Placeholder);
        assert_eq!(
            CardImage::from_source(Some("https://cdn.example/x.jpg")),
            CardImage::Url("https://cdn.example/x.jpg".into())
        );
        assert_eq!(CardImage::from_source(None), CardImage::Placeholder);
    }

    #[test]
    fn image_label_is_final_path_segment() {
        let img = CardImage::from_source(Some("https://cdn.example/phones/13pro-front.jpg"));
        assert_eq!(img.label(), "13pro-front.jpg");
        assert_eq!(CardImage::Placeholder.label(), IMAGE_PLACEHOLDER);
    }

    #[test]
    fn detail_view_grid_and_similar_rows() {
        let mut p = product("a", "iPhone 13 Pro", "Apple", Some("Sierra Blue"));
        p.details
            .extra
            .insert("dualSim".into(), serde_json::json!(true));
        let similar = vec![Arc::new(product("b", "iPhone 12", "Apple", None))];

        let view = DetailView::build(&p, &similar);

        assert_eq!(view.title, "Apple iPhone 13 Pro");
        assert_eq!(view.specs[0], SpecRow::new("Model", "iPhone 13 Pro"));
        assert_eq!(view.specs[1], SpecRow::new("Color", "Sierra Blue"));
        assert_eq!(view.specs[2], SpecRow::new("Storage", "128 GB"));
        assert_eq!(view.specs[3], SpecRow::new("Battery Health", "90%"));
        assert_eq!(view.specs[4], SpecRow::new("Dual Sim", "Yes"));

        assert_eq!(view.similar.len(), 1);
        assert_eq!(view.similar[0].model, "iPhone 12");
        assert_eq!(view.similar[0].price_label, "1000 DH");
    }
}
