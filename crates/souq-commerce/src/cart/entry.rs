//! Cart entry model.

use crate::catalog::{ColorVariant, LocalizedText, Product};
use crate::ids::{EntryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The product fields a cart entry needs, copied at add time.
///
/// The cart never holds mutable catalog state; this is a frozen snapshot
/// of the record as it looked when the customer added it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    /// Product identifier.
    pub id: ProductId,
    /// Localized product name (denormalized for display).
    pub name: LocalizedText,
    /// Unit price in the base currency.
    pub price: Money,
    /// Stock at add time; the upper bound for this entry's quantity.
    pub stock: i64,
}

impl ProductSnapshot {
    /// Snapshot a catalog record.
    pub fn of(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
        }
    }
}

/// One line item in the shopping cart, keyed by product + variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Derived from `(product, size, color)`; stable across re-adds.
    pub id: EntryId,
    /// Product snapshot taken at add time.
    pub product: ProductSnapshot,
    /// Chosen size label.
    pub size: String,
    /// Chosen color variant.
    pub color: ColorVariant,
    /// Quantity, always within `[1, product.stock]`.
    pub quantity: i64,
}

impl CartEntry {
    /// Create a new entry. Quantity bounds are the cart's responsibility.
    pub(crate) fn new(
        product: &Product,
        size: impl Into<String>,
        color: ColorVariant,
        quantity: i64,
    ) -> Self {
        let size = size.into();
        Self {
            id: EntryId::derive(&product.id, &size, &color.name),
            product: ProductSnapshot::of(product),
            size,
            color,
            quantity,
        }
    }

    /// Line total, computed on demand and never stored.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }

    /// Check if this entry is the `(product, size, color)` variant.
    pub fn matches(&self, product_id: &ProductId, size: &str, color_name: &str) -> bool {
        &self.product.id == product_id && self.size == size && self.color.name == color_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(
            ProductId::new("prod-1"),
            LocalizedText::new("Linen Shirt", "\u{0642}\u{0645}\u{064a}\u{0635}"),
            Money::from_pounds(450.0),
            10,
        )
    }

    fn black() -> ColorVariant {
        ColorVariant::new(
            "black",
            LocalizedText::new("Black", "\u{0623}\u{0633}\u{0648}\u{062f}"),
            "#1a1a1a",
            "/img/black.jpg",
        )
    }

    #[test]
    fn test_entry_id_matches_variant_triple() {
        let entry = CartEntry::new(&product(), "M", black(), 2);
        assert_eq!(
            entry.id,
            EntryId::derive(&ProductId::new("prod-1"), "M", "black")
        );
        assert!(entry.matches(&ProductId::new("prod-1"), "M", "black"));
        assert!(!entry.matches(&ProductId::new("prod-1"), "L", "black"));
    }

    #[test]
    fn test_line_total_is_computed() {
        let mut entry = CartEntry::new(&product(), "M", black(), 2);
        assert_eq!(entry.line_total(), Money::from_pounds(900.0));
        entry.quantity = 3;
        assert_eq!(entry.line_total(), Money::from_pounds(1350.0));
    }
}
