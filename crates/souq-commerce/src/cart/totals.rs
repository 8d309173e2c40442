//! Order totals pipeline.
//!
//! Pure functions from a cart snapshot to a totals breakdown. Everything
//! is recomputed from scratch on every call — no incremental update path,
//! so there is no drift to guard against. All arithmetic is in the base
//! currency; display conversion happens after, never before.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Free shipping applies strictly above this subtotal (E£1000.00).
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(100_000);

/// Flat shipping fee below the threshold (E£50.00).
pub const FLAT_SHIPPING_FEE: Money = Money::new(5_000);

/// Flat VAT rate, applied to the subtotal only; shipping is not taxed.
pub const VAT_RATE: f64 = 0.14;

/// The fixed pricing constants, grouped so tests and hosts see them in one
/// place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingPolicy {
    /// Subtotal above which shipping is free (strict comparison).
    pub free_shipping_threshold: Money,
    /// Shipping fee charged at or below the threshold.
    pub flat_shipping_fee: Money,
    /// VAT rate on the subtotal.
    pub vat_rate: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            flat_shipping_fee: FLAT_SHIPPING_FEE,
            vat_rate: VAT_RATE,
        }
    }
}

impl PricingPolicy {
    /// Run the pipeline for a given subtotal.
    ///
    /// A subtotal exactly at the threshold still pays shipping; only a
    /// strictly greater one ships free. An empty cart (subtotal zero) pays
    /// the flat fee as well — the threshold is the only rule here, with no
    /// empty-cart special case.
    pub fn totals_for(&self, subtotal: Money) -> OrderTotals {
        let shipping = if subtotal > self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping_fee
        };
        let tax = subtotal.multiply_decimal(self.vat_rate);
        let total = subtotal + shipping + tax;

        OrderTotals {
            subtotal,
            shipping,
            tax,
            total,
        }
    }

    /// Run the pipeline over a cart snapshot.
    pub fn totals(&self, cart: &Cart) -> OrderTotals {
        self.totals_for(cart.subtotal())
    }
}

/// Derived totals breakdown for a cart snapshot.
///
/// Never stored independently of the cart it was computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Threshold-based shipping fee.
    pub shipping: Money,
    /// VAT on the subtotal.
    pub tax: Money,
    /// `subtotal + shipping + tax`.
    pub total: Money,
}

/// Compute totals for a cart under the default pricing policy.
pub fn compute_totals(cart: &Cart) -> OrderTotals {
    PricingPolicy::default().totals(cart)
}
