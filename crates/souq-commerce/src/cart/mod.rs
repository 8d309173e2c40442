//! Shopping cart module.
//!
//! Contains the cart entry model, the cart itself, and the order totals
//! pipeline.

mod cart;
mod entry;
mod totals;

pub use cart::Cart;
pub use entry::{CartEntry, ProductSnapshot};
pub use totals::{
    compute_totals, OrderTotals, PricingPolicy, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD,
    VAT_RATE,
};
