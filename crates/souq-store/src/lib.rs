//! The shared client-side storefront store.
//!
//! A single [`StorefrontStore`] is the source of truth for cart contents,
//! wishlist membership, the selected display currency, and the per-session
//! checkout flow. UI components read its derived queries for display and
//! call its mutation operations in response to user actions; no component
//! touches cart state directly.
//!
//! The store is single-threaded by construction: every mutation takes
//! `&mut self`, runs to completion, and is observed consistently by the
//! next read. The one asynchronous point is order submission, which goes
//! through the [`OrderGateway`] seam — see [`gateway`].
//!
//! # Example
//!
//! ```rust,ignore
//! use souq_store::prelude::*;
//!
//! let mut store = StorefrontStore::new();
//! store.add_to_cart(&product, "M", color, 2)?;
//!
//! let totals = store.totals();
//! println!("Total: {}", store.display_price(totals.total));
//!
//! store.begin_checkout().set_shipping(shipping);
//! ```

pub mod error;
pub mod gateway;
pub mod store;

pub use error::StoreError;
pub use gateway::{OrderGateway, SimulatedGateway, SubmitError};
pub use store::StorefrontStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::gateway::{OrderDraft, OrderGateway, SimulatedGateway, SubmitError};
    pub use crate::store::StorefrontStore;
    pub use souq_commerce::prelude::*;
}
