//! The shopping cart.

use crate::cart::CartEntry;
use crate::catalog::{ColorVariant, Product};
use crate::error::CommerceError;
use crate::ids::EntryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An ordered collection of cart entries.
///
/// Entries keep insertion order. Every entry satisfies
/// `1 <= quantity <= product.stock`, and no two entries share a
/// `(product, size, color)` triple: adding the same variant twice merges
/// into one entry.
///
/// Derived queries (`item_count`, `subtotal`) are recomputed from the
/// entries on every call; nothing is cached, so there is no staleness to
/// manage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant choice to the cart.
    ///
    /// Returns an error if `quantity < 1` or the product has no stock;
    /// neither touches the cart. If the variant is already present its
    /// quantity grows by `quantity`, clamped to stock with the excess
    /// dropped silently. A new entry is appended with quantity clamped to
    /// `[1, stock]`.
    ///
    /// Note the clamp/reject asymmetry with [`Cart::update_quantity`]:
    /// adding clamps, editing rejects. Both carry over from the behavior
    /// this cart models; see DESIGN.md before changing either.
    pub fn add(
        &mut self,
        product: &Product,
        size: impl Into<String>,
        color: ColorVariant,
        quantity: i64,
    ) -> Result<EntryId, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.stock <= 0 {
            return Err(CommerceError::OutOfStock(product.id.to_string()));
        }
        // Quantities never exceed stock, so checking price * stock once
        // here bounds every line total this entry can reach.
        product
            .price
            .try_multiply(product.stock)
            .ok_or(CommerceError::Overflow)?;

        let size = size.into();
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.matches(&product.id, &size, &color.name))
        {
            existing.quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(existing.product.stock);
            return Ok(existing.id.clone());
        }

        let entry = CartEntry::new(product, size, color, quantity.min(product.stock));
        let id = entry.id.clone();
        self.entries.push(entry);
        Ok(id)
    }

    /// Set an entry's quantity.
    ///
    /// A quantity below 1 removes the entry ("delete via zero"). A
    /// quantity above the entry's stock is rejected with
    /// `InsufficientStock` and the entry is left unchanged — unlike
    /// [`Cart::add`], which clamps. An unknown id is rejected with
    /// `EntryNotFound`.
    pub fn update_quantity(
        &mut self,
        entry_id: &EntryId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity < 1 {
            return Ok(self.remove(entry_id));
        }

        let Some(entry) = self.entries.iter_mut().find(|e| &e.id == entry_id) else {
            return Err(CommerceError::EntryNotFound(entry_id.to_string()));
        };

        if quantity > entry.product.stock {
            return Err(CommerceError::InsufficientStock {
                requested: quantity,
                available: entry.product.stock,
            });
        }

        entry.quantity = quantity;
        Ok(true)
    }

    /// Remove an entry. Idempotent: a missing id is a no-op.
    pub fn remove(&mut self, entry_id: &EntryId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.id != entry_id);
        self.entries.len() < len_before
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Subtotal in the base currency, recomputed from the entries.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.entries.iter().map(|e| e.line_total()))
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn entry(&self, entry_id: &EntryId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.id == entry_id)
    }
}
