// ── Filter engine ──
//
// Derives a filtered view from the full collection: a brand predicate
// followed by a free-text search over name, model, and color. Pure and
// stable; the UI recomputes it on every filter-state change.

use std::sync::Arc;

use crate::model::Product;

/// Brand stage of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    /// Every product passes.
    #[default]
    All,
    /// Case-insensitive match on the product's brand.
    Brand(String),
}

impl BrandFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Brand(b) => product.details.brand.eq_ignore_ascii_case(b),
        }
    }

    /// Tab label for this filter.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Brand(b) => b,
        }
    }
}

/// Complete filter state. Mutated only by the event router.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub brand: BrandFilter,
    pub search: String,
}

impl FilterState {
    /// The normalized search needle: trimmed, lower-cased. Empty means
    /// the search stage is inactive.
    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

/// Case-insensitive per-field substring check. A missing color is a
/// non-match for that field only.
fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.details.model.to_lowercase().contains(needle)
        || product
            .details
            .color
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

/// Apply the filter state to a collection. Output preserves input order.
pub fn filter_products(products: &[Arc<Product>], state: &FilterState) -> Vec<Arc<Product>> {
    let needle = state.needle();
    products
        .iter()
        .filter(|p| state.brand.matches(p))
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::store::tests::product;

    fn collection() -> Vec<Arc<Product>> {
        vec![
            Arc::new(product("a", "iPhone 13 Pro", "Apple", Some("Sierra Blue"))),
            Arc::new(product("b", "Galaxy S22", "Samsung", Some("Red Titanium"))),
            Arc::new(product("c", "Phone Red Case", "Samsung", Some("Blue"))),
            Arc::new(product("d", "iPhone 12", "Apple", None)),
        ]
    }

    fn ids(view: &[Arc<Product>]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn all_with_empty_search_passes_everything_in_order() {
        let view = filter_products(&collection(), &FilterState::default());
        assert_eq!(ids(&view), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn brand_filter_is_case_insensitive() {
        let state = FilterState {
            brand: BrandFilter::Brand("apple".into()),
            search: String::new(),
        };
        let view = filter_products(&collection(), &state);
        assert_eq!(ids(&view), vec!["a", "d"]);
        assert!(view.iter().all(|p| p.details.brand.eq_ignore_ascii_case("apple")));
    }

    #[test]
    fn search_matches_name_model_or_color_per_field() {
        // "red" matches b on color ("Red Titanium") and c on name
        // ("Phone Red Case") — per-field OR, not a concatenated haystack.
        let state = FilterState {
            brand: BrandFilter::All,
            search: "red".into(),
        };
        let view = filter_products(&collection(), &state);
        assert_eq!(ids(&view), vec!["b", "c"]);
    }

    #[test]
    fn missing_color_does_not_exclude_on_other_fields() {
        let state = FilterState {
            brand: BrandFilter::All,
            search: "iphone 12".into(),
        };
        let view = filter_products(&collection(), &state);
        assert_eq!(ids(&view), vec!["d"]);
    }

    #[test]
    fn search_is_trimmed_and_case_folded() {
        let state = FilterState {
            brand: BrandFilter::All,
            search: "  SIERRA  ".into(),
        };
        let view = filter_products(&collection(), &state);
        assert_eq!(ids(&view), vec!["a"]);
    }

    #[test]
    fn brand_and_search_compose() {
        let state = FilterState {
            brand: BrandFilter::Brand("Samsung".into()),
            search: "red".into(),
        };
        let view = filter_products(&collection(), &state);
        assert_eq!(ids(&view), vec!["b", "c"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let state = FilterState {
            brand: BrandFilter::Brand("Apple".into()),
            search: "13".into(),
        };
        let once = filter_products(&collection(), &state);
        let twice = filter_products(&once, &state);
        assert_eq!(ids(&once), ids(&twice));
    }
}
