//! Store error types.

use crate::gateway::SubmitError;
use souq_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by the storefront store.
///
/// Every variant leaves the store in the state it was in before the
/// rejected operation; nothing here is fatal to the session.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A cart or checkout rule rejected the operation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Order placement was attempted without an active checkout session.
    #[error("No active checkout session")]
    NoActiveCheckout,

    /// Order placement was attempted before reaching the review step.
    #[error("Checkout is at {0}; order placement requires the review step")]
    NotAtReview(&'static str),

    /// The gateway rejected or failed the submission; the cart and the
    /// checkout session are untouched and the customer may resubmit.
    #[error("Order submission failed: {0}")]
    SubmissionFailed(#[from] SubmitError),
}
