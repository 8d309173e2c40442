//! Order submission gateway.
//!
//! The storefront has no backend; submission goes through this seam so a
//! real one can be dropped in later without touching the store. The
//! bundled [`SimulatedGateway`] sleeps a fixed delay and then accepts or
//! rejects — the delay only exists to exercise a pending UI state and
//! carries no other meaning.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use souq_commerce::cart::{CartEntry, OrderTotals};
use souq_commerce::checkout::{Order, PaymentMethod, ShippingDetails};
use std::time::Duration;
use thiserror::Error;

/// Everything an order needs, frozen at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Cart entries at submission time.
    pub line_items: Vec<CartEntry>,
    /// Totals computed from those entries.
    pub totals: OrderTotals,
    /// Shipping information from the checkout session.
    pub shipping: ShippingDetails,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
}

/// Submission failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The order was rejected (e.g., payment declined).
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The gateway could not be reached.
    #[error("Gateway unavailable")]
    Unavailable,
}

/// The seam where a real order backend would go.
///
/// Submission is a single suspend point with no cancellation: once the
/// customer submits, the outcome arrives or it doesn't — the UI cannot
/// abort it.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit an order draft, returning the confirmed order.
    async fn submit(&self, draft: OrderDraft) -> Result<Order, SubmitError>;
}

/// What the simulated gateway should do after its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimulatedOutcome {
    Accept,
    Reject,
}

/// A gateway that simulates asynchronous order processing.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedGateway {
    /// A gateway that accepts every order after the default delay.
    pub fn accepting() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            outcome: SimulatedOutcome::Accept,
        }
    }

    /// A gateway that rejects every order after the default delay.
    pub fn rejecting() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            outcome: SimulatedOutcome::Reject,
        }
    }

    /// Override the simulated processing delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::accepting()
    }
}

#[async_trait]
impl OrderGateway for SimulatedGateway {
    async fn submit(&self, draft: OrderDraft) -> Result<Order, SubmitError> {
        tokio::time::sleep(self.delay).await;

        match self.outcome {
            SimulatedOutcome::Accept => {
                let mut order = Order::new(
                    draft.line_items,
                    draft.totals,
                    draft.shipping,
                    draft.payment_method,
                );
                order.confirm();
                Ok(order)
            }
            SimulatedOutcome::Reject => {
                Err(SubmitError::Rejected("payment declined".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use souq_commerce::cart::{compute_totals, Cart};
    use souq_commerce::checkout::OrderStatus;

    fn empty_draft() -> OrderDraft {
        OrderDraft {
            line_items: Vec::new(),
            totals: compute_totals(&Cart::new()),
            shipping: ShippingDetails::default(),
            payment_method: PaymentMethod::CashOnDelivery,
        }
    }

    #[tokio::test]
    async fn test_accepting_gateway_confirms() {
        let gateway = SimulatedGateway::accepting().with_delay(Duration::from_millis(1));
        let order = gateway.submit(empty_draft()).await.unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_rejecting_gateway_fails() {
        let gateway = SimulatedGateway::rejecting().with_delay(Duration::from_millis(1));
        let result = gateway.submit(empty_draft()).await;
        assert!(matches!(result, Err(SubmitError::Rejected(_))));
    }
}
