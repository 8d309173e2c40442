//! Product and variant types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A bilingual display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LocalizedText {
    /// English text.
    pub en: String,
    /// Arabic text.
    pub ar: String,
}

impl LocalizedText {
    /// Create a localized string pair.
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }
}

/// A color variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorVariant {
    /// Canonical color name, part of the cart entry identity.
    pub name: String,
    /// Localized display label.
    pub label: LocalizedText,
    /// Display hex code (e.g., "#1a1a1a").
    pub hex: String,
    /// Representative image URL for this color.
    pub image_url: String,
}

impl ColorVariant {
    /// Create a color variant.
    pub fn new(
        name: impl Into<String>,
        label: LocalizedText,
        hex: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label,
            hex: hex.into(),
            image_url: image_url.into(),
        }
    }
}

/// A product in the catalog.
///
/// Immutable from the cart's point of view; the cart snapshots the fields
/// it needs at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Localized product name.
    pub name: LocalizedText,
    /// Unit price in the base currency.
    pub price: Money,
    /// Units available; the upper bound for any cart quantity.
    pub stock: i64,
    /// Available size labels.
    pub sizes: Vec<String>,
    /// Available color variants.
    pub colors: Vec<ColorVariant>,
}

impl Product {
    /// Create a new product with no sizes or colors.
    pub fn new(id: ProductId, name: LocalizedText, price: Money, stock: i64) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            sizes: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Add a size label.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        let size = size.into();
        if !self.sizes.contains(&size) {
            self.sizes.push(size);
        }
        self
    }

    /// Add a color variant.
    pub fn with_color(mut self, color: ColorVariant) -> Self {
        if !self.colors.iter().any(|c| c.name == color.name) {
            self.colors.push(color);
        }
        self
    }

    /// Check if the product has any stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Look up a color variant by name.
    pub fn color(&self, name: &str) -> Option<&ColorVariant> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Check if the product offers a size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}
