//! Checkout module.
//!
//! Contains the checkout step machine, the shipping and payment forms it
//! guards on, and the placed-order record.

mod flow;
mod forms;
mod order;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use forms::{CardDetails, PaymentMethod, ShippingDetails};
pub use order::{Order, OrderStatus};
