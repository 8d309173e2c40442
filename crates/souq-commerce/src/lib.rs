//! Storefront domain types and logic.
//!
//! This crate holds the state that carries actual invariants in the
//! storefront: the shopping cart, the order totals pipeline, the wishlist,
//! and the checkout step machine. Everything presentational (routing,
//! rendering, the product pages themselves) lives outside and only calls
//! into these types.
//!
//! - **Money**: all arithmetic happens in the base currency (EGP, stored
//!   in piasters); USD/EUR conversion is display-only.
//! - **Catalog**: read-only product records the cart snapshots at add time.
//! - **Cart**: merge-by-variant entries, stock-bounded quantities,
//!   derived queries recomputed on every call.
//! - **Checkout**: a linear three-step flow with per-step field guards.
//!
//! # Example
//!
//! ```rust,ignore
//! use souq_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let color = product.colors[0].clone();
//! cart.add(&product, "M", color, 2)?;
//!
//! let totals = compute_totals(&cart);
//! println!("Total: {}", totals.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, ColorVariant, LocalizedText, Product};

    // Cart
    pub use crate::cart::{
        compute_totals, Cart, CartEntry, OrderTotals, PricingPolicy, ProductSnapshot,
        FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, VAT_RATE,
    };

    // Wishlist
    pub use crate::wishlist::Wishlist;

    // Checkout
    pub use crate::checkout::{
        CardDetails, CheckoutFlow, CheckoutStep, Order, OrderStatus, PaymentMethod,
        ShippingDetails,
    };
}
