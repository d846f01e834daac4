// ── Product store ──
//
// Owns the fetched collection for the session. The collection is set
// wholesale when a fetch succeeds and replaced wholesale on retry; it is
// never mutated in place. Snapshots are cheap Arc clones.

use std::sync::Arc;

use crate::error::CoreError;
use crate::model::{Product, ProductId};

/// Distinct brands in first-seen order (case-insensitive dedupe,
/// first-seen casing wins). Feeds the brand filter tabs.
pub fn distinct_brands(products: &[Arc<Product>]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        let brand = &product.details.brand;
        if !seen.iter().any(|b| b.eq_ignore_ascii_case(brand)) {
            seen.push(brand.clone());
        }
    }
    seen
}

/// Up to `limit` products of the same brand as `product`, excluding the
/// product itself, in collection order.
pub fn similar_products(
    products: &[Arc<Product>],
    product: &Product,
    limit: usize,
) -> Vec<Arc<Product>> {
    products
        .iter()
        .filter(|p| p.brand == product.brand && p.id != product.id)
        .take(limit)
        .cloned()
        .collect()
}

/// Holds the full product collection and answers lookups over it.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Arc<Vec<Arc<Product>>>,
    loaded: bool,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection (fetch success or retry).
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = Arc::new(products.into_iter().map(Arc::new).collect());
        self.loaded = true;
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<Arc<Product>>> {
        Arc::clone(&self.products)
    }

    /// Whether a fetch has ever succeeded. Before that the collection is
    /// empty and the browsing controls have nothing to act on.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id. Returns `None` for stale ids.
    pub fn product(&self, id: &ProductId) -> Option<Arc<Product>> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    /// Like [`product`], but a stale id is a [`CoreError::ProductNotFound`].
    ///
    /// [`product`]: Self::product
    pub fn require(&self, id: &ProductId) -> Result<Arc<Product>, CoreError> {
        self.product(id).ok_or_else(|| CoreError::ProductNotFound {
            id: id.to_string(),
        })
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<String> {
        distinct_brands(&self.products)
    }

    /// Up to `limit` products of the same brand as `product`, excluding
    /// the product itself, in collection order.
    pub fn similar_to(&self, product: &Product, limit: usize) -> Vec<Arc<Product>> {
        similar_products(&self.products, product, limit)
    }
}
