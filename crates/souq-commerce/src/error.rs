//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
///
/// These are validation-style rejections, not system faults: a rejected
/// operation leaves the cart or checkout exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Entry not in cart.
    #[error("Entry not in cart: {0}")]
    EntryNotFound(String),

    /// Invalid quantity (must be at least 1).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Product has no stock at all.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// Requested quantity exceeds available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// Invalid checkout step transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout step guard failed.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
