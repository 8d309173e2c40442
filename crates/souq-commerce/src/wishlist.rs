//! Wishlist membership set.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A set of wishlisted product ids.
///
/// Add and remove are idempotent. Membership order carries no meaning;
/// display order follows the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product id. Returns false if it was already present.
    pub fn add(&mut self, product_id: ProductId) -> bool {
        if self.ids.contains(&product_id) {
            return false;
        }
        self.ids.push(product_id);
        true
    }

    /// Remove a product id. Returns false if it was not present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.ids.len();
        self.ids.retain(|id| id != product_id);
        self.ids.len() < len_before
    }

    /// Flip membership. Returns true if the product is now wishlisted.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.remove(&product_id) {
            false
        } else {
            self.ids.push(product_id);
            true
        }
    }

    /// Check membership.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.ids.contains(product_id)
    }

    /// Number of wishlisted products.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the wishlisted ids.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Resolve the wishlisted products against a catalog, in catalog
    /// order. Ids the catalog no longer knows are skipped.
    pub fn products_in<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .filter(|p| self.contains(&p.id))
            .collect()
    }
}
