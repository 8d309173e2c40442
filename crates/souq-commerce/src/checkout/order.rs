//! Placed-order record.

use crate::cart::{CartEntry, OrderTotals};
use crate::checkout::{PaymentMethod, ShippingDetails};
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Only the states reachable in this storefront are modeled: an order is
/// pending while submission is in flight and confirmed once the gateway
/// accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Submission accepted, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed.
    Confirmed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
        }
    }
}

/// A placed order: the cart snapshot plus checkout data, frozen at
/// submission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Order status.
    pub status: OrderStatus,
    /// Cart entries at submission time.
    pub line_items: Vec<CartEntry>,
    /// Totals computed from those entries.
    pub totals: OrderTotals,
    /// Shipping information.
    pub shipping: ShippingDetails,
    /// How the customer pays.
    pub payment_method: PaymentMethod,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Create a pending order from a cart snapshot and checkout data.
    pub fn new(
        line_items: Vec<CartEntry>,
        totals: OrderTotals,
        shipping: ShippingDetails,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            order_number: Self::generate_order_number(),
            status: OrderStatus::Pending,
            line_items,
            totals,
            shipping,
            payment_method,
            created_at: current_timestamp(),
        }
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("ORD-{}", ts)
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Mark the order confirmed.
    pub fn confirm(&mut self) {
        self.status = OrderStatus::Confirmed;
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
