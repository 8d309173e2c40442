//! Shipping and payment form data.
//!
//! Completeness means non-empty only; there is no format validation of
//! phone numbers, emails, or card numbers at this layer.

use serde::{Deserialize, Serialize};

/// Shipping information collected in the first checkout step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingDetails {
    /// Receiver full name.
    pub receiver_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Governorate.
    pub governorate: String,
    /// Postal code.
    pub postal_code: String,
}

impl ShippingDetails {
    /// Check that every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.receiver_name.trim().is_empty() {
            missing.push("receiver name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.governorate.trim().is_empty() {
            missing.push("governorate");
        }
        if self.postal_code.trim().is_empty() {
            missing.push("postal code");
        }
        missing
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Credit or debit card; requires complete card details.
    Card,
    /// Pay the courier on delivery.
    #[default]
    CashOnDelivery,
    /// Mobile wallet transfer.
    MobileWallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::CashOnDelivery => "cash_on_delivery",
            PaymentMethod::MobileWallet => "mobile_wallet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::CashOnDelivery => "Cash on delivery",
            PaymentMethod::MobileWallet => "Mobile wallet",
        }
    }
}

/// Card fields collected in the payment step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetails {
    /// Name on the card.
    pub holder_name: String,
    /// Card number.
    pub number: String,
    /// Expiry (MM/YY as typed).
    pub expiry: String,
    /// Security code.
    pub cvv: String,
}

impl CardDetails {
    /// Check that every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.holder_name.trim().is_empty() {
            missing.push("card holder name");
        }
        if self.number.trim().is_empty() {
            missing.push("card number");
        }
        if self.expiry.trim().is_empty() {
            missing.push("expiry");
        }
        if self.cvv.trim().is_empty() {
            missing.push("cvv");
        }
        missing
    }
}
