//! Checkout step machine.

use crate::checkout::{CardDetails, PaymentMethod, ShippingDetails};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Shipping information form.
    #[default]
    ShippingInfo,
    /// Payment method selection.
    PaymentMethod,
    /// Order review before submission.
    Review,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::ShippingInfo => "shipping_info",
            CheckoutStep::PaymentMethod => "payment_method",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::ShippingInfo => "Shipping",
            CheckoutStep::PaymentMethod => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::ShippingInfo => 1,
            CheckoutStep::PaymentMethod => 2,
            CheckoutStep::Review => 3,
        }
    }
}

/// Per-session checkout state.
///
/// Linear flow: shipping info, payment method, review. Forward moves are
/// guarded by form completeness; back moves are always allowed. The flow
/// is independent of the cart and only consumes a cart snapshot at order
/// placement. A session is created fresh per checkout attempt and
/// discarded on successful placement or navigation away.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Shipping form state.
    pub shipping: ShippingDetails,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
    /// Card form state (only guarded on when paying by card).
    pub card: CardDetails,
}

impl CheckoutFlow {
    /// Start a fresh checkout session at the shipping step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the current step's guard passes.
    pub fn can_advance(&self) -> bool {
        match self.step {
            CheckoutStep::ShippingInfo => self.shipping.is_complete(),
            CheckoutStep::PaymentMethod => {
                // Only card payment has fields to fill; any other method
                // moves on unconditionally.
                self.payment_method != PaymentMethod::Card || self.card.is_complete()
            }
            CheckoutStep::Review => false,
        }
    }

    /// Move to the next step.
    ///
    /// Guard failures return `CheckoutIncomplete` with the missing field
    /// names and leave the step unchanged. Review has no forward step;
    /// order placement is the only way out of it.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::ShippingInfo => CheckoutStep::PaymentMethod,
            CheckoutStep::PaymentMethod => CheckoutStep::Review,
            CheckoutStep::Review => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.step.as_str().to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance() {
            return Err(CommerceError::CheckoutIncomplete(
                self.missing_for_current_step().join(", "),
            ));
        }

        self.step = next;
        Ok(next)
    }

    /// Go back one step. Always allowed except at the first step.
    pub fn back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::ShippingInfo => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.step.as_str().to_string(),
                    to: "none".to_string(),
                })
            }
            CheckoutStep::PaymentMethod => CheckoutStep::ShippingInfo,
            CheckoutStep::Review => CheckoutStep::PaymentMethod,
        };

        self.step = prev;
        Ok(prev)
    }

    /// What the current step's guard is still waiting on.
    pub fn missing_for_current_step(&self) -> Vec<&'static str> {
        match self.step {
            CheckoutStep::ShippingInfo => self.shipping.missing_fields(),
            CheckoutStep::PaymentMethod => {
                if self.payment_method == PaymentMethod::Card {
                    self.card.missing_fields()
                } else {
                    Vec::new()
                }
            }
            CheckoutStep::Review => Vec::new(),
        }
    }

    /// Replace the shipping form state.
    pub fn set_shipping(&mut self, shipping: ShippingDetails) {
        self.shipping = shipping;
    }

    /// Select the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Replace the card form state.
    pub fn set_card(&mut self, card: CardDetails) {
        self.card = card;
    }

    /// Check if the flow has reached the review step.
    pub fn is_at_review(&self) -> bool {
        self.step == CheckoutStep::Review
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_shipping() -> ShippingDetails {
        ShippingDetails {
            receiver_name: "Salma Hassan".into(),
            phone: "+20 100 555 0199".into(),
            email: "salma@example.com".into(),
            address: "14 Talaat Harb St".into(),
            city: "Cairo".into(),
            governorate: "Cairo".into(),
            postal_code: "11511".into(),
        }
    }

    fn filled_card() -> CardDetails {
        CardDetails {
            holder_name: "SALMA HASSAN".into(),
            number: "4111111111111111".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn test_starts_at_shipping() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step, CheckoutStep::ShippingInfo);
    }

    #[test]
    fn test_shipping_guard_blocks_without_fields() {
        let mut flow = CheckoutFlow::new();
        let result = flow.advance();
        assert!(matches!(result, Err(CommerceError::CheckoutIncomplete(_))));
        assert_eq!(flow.step, CheckoutStep::ShippingInfo);
    }

    #[test]
    fn test_full_walk_with_cash_on_delivery() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        assert_eq!(flow.advance(), Ok(CheckoutStep::PaymentMethod));

        // Cash on delivery has no card fields to fill.
        flow.set_payment_method(PaymentMethod::CashOnDelivery);
        assert_eq!(flow.advance(), Ok(CheckoutStep::Review));
        assert!(flow.is_at_review());
    }

    #[test]
    fn test_card_guard_requires_card_fields() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();

        flow.set_payment_method(PaymentMethod::Card);
        let result = flow.advance();
        assert!(matches!(result, Err(CommerceError::CheckoutIncomplete(_))));
        assert_eq!(flow.step, CheckoutStep::PaymentMethod);

        flow.set_card(filled_card());
        assert_eq!(flow.advance(), Ok(CheckoutStep::Review));
    }

    #[test]
    fn test_back_is_always_allowed() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();

        assert_eq!(flow.back(), Ok(CheckoutStep::ShippingInfo));
        assert!(flow.back().is_err()); // nothing before the first step
    }

    #[test]
    fn test_review_has_no_forward_step() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();
        flow.advance().unwrap();

        assert!(matches!(
            flow.advance(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
        assert!(flow.is_at_review());
    }

    #[test]
    fn test_guard_failure_reports_missing_fields() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(ShippingDetails {
            receiver_name: "Salma Hassan".into(),
            ..Default::default()
        });

        match flow.advance() {
            Err(CommerceError::CheckoutIncomplete(missing)) => {
                assert!(missing.contains("phone"));
                assert!(missing.contains("city"));
                assert!(!missing.contains("receiver name"));
            }
            other => panic!("expected CheckoutIncomplete, got {:?}", other),
        }
    }
}
