//! The storefront store.

use crate::error::StoreError;
use crate::gateway::{OrderDraft, OrderGateway};
use serde::{Deserialize, Serialize};
use souq_commerce::cart::{Cart, OrderTotals, PricingPolicy};
use souq_commerce::catalog::{ColorVariant, Product};
use souq_commerce::checkout::{CheckoutFlow, Order};
use souq_commerce::ids::{EntryId, ProductId};
use souq_commerce::money::{Currency, Money};
use souq_commerce::wishlist::Wishlist;
use tracing::{debug, info, warn};

/// Single source of truth for cart contents, wishlist membership, display
/// currency, and the per-session checkout flow.
///
/// All writes go through the methods here; derived queries recompute from
/// current state on every call. Mutations take `&mut self` and run to
/// completion, so every read observes a consistent snapshot — the
/// single-threaded, event-driven model needs no locks.
///
/// State is memory-only and lost when the store is dropped; there is no
/// persistence layer behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontStore {
    cart: Cart,
    wishlist: Wishlist,
    display_currency: Currency,
    checkout: Option<CheckoutFlow>,
    policy: PricingPolicy,
}

impl StorefrontStore {
    /// Create an empty store with the default pricing policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a custom pricing policy.
    pub fn with_policy(policy: PricingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    // ---- Cart mutations ----

    /// Add a variant choice to the cart.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        size: impl Into<String>,
        color: ColorVariant,
        quantity: i64,
    ) -> Result<EntryId, StoreError> {
        let size = size.into();
        let id = self.cart.add(product, size.as_str(), color, quantity)?;
        debug!(product = %product.id, %size, quantity, "added to cart");
        Ok(id)
    }

    /// Set a cart entry's quantity. Zero removes; above stock is rejected
    /// with the cart untouched.
    pub fn update_quantity(
        &mut self,
        entry_id: &EntryId,
        quantity: i64,
    ) -> Result<bool, StoreError> {
        let changed = self.cart.update_quantity(entry_id, quantity)?;
        debug!(entry = %entry_id, quantity, changed, "updated quantity");
        Ok(changed)
    }

    /// Remove a cart entry. Idempotent.
    pub fn remove_from_cart(&mut self, entry_id: &EntryId) -> bool {
        let removed = self.cart.remove(entry_id);
        if removed {
            debug!(entry = %entry_id, "removed from cart");
        }
        removed
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
    }

    // ---- Wishlist mutations ----

    /// Add a product to the wishlist. Idempotent.
    pub fn add_to_wishlist(&mut self, product_id: ProductId) -> bool {
        self.wishlist.add(product_id)
    }

    /// Remove a product from the wishlist. Idempotent.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> bool {
        self.wishlist.remove(product_id)
    }

    /// Flip wishlist membership. Returns true if now wishlisted.
    pub fn toggle_wishlist(&mut self, product_id: ProductId) -> bool {
        self.wishlist.toggle(product_id)
    }

    // ---- Display currency ----

    /// Select the currency prices are displayed in. Stored amounts stay
    /// in the base currency regardless.
    pub fn set_display_currency(&mut self, currency: Currency) {
        self.display_currency = currency;
    }

    /// The currently selected display currency.
    pub fn display_currency(&self) -> Currency {
        self.display_currency
    }

    /// Format a base-currency amount in the selected display currency.
    pub fn display_price(&self, amount: Money) -> String {
        amount.display_in(self.display_currency)
    }

    // ---- Derived queries ----

    /// The cart, read-only.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The wishlist, read-only.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Sum of cart quantities.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Cart subtotal in the base currency.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Run the totals pipeline over the current cart. Recomputed on every
    /// call; nothing is cached.
    pub fn totals(&self) -> OrderTotals {
        self.policy.totals(&self.cart)
    }

    /// Check wishlist membership.
    pub fn in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    // ---- Checkout session ----

    /// Start a fresh checkout session, replacing any stale one.
    pub fn begin_checkout(&mut self) -> &mut CheckoutFlow {
        debug!("checkout session started");
        self.checkout.insert(CheckoutFlow::new())
    }

    /// Discard the checkout session (navigation away).
    pub fn cancel_checkout(&mut self) {
        if self.checkout.take().is_some() {
            debug!("checkout session discarded");
        }
    }

    /// The active checkout session, if any.
    pub fn checkout(&self) -> Option<&CheckoutFlow> {
        self.checkout.as_ref()
    }

    /// The active checkout session, mutable, for form input and step
    /// transitions.
    pub fn checkout_mut(&mut self) -> Option<&mut CheckoutFlow> {
        self.checkout.as_mut()
    }

    /// Submit the order from the review step.
    ///
    /// Builds a draft from the current cart snapshot and totals, then
    /// awaits the gateway — a single suspend point, not cancellable. On
    /// success the cart is cleared and the checkout session discarded; the
    /// confirmed order is returned for the confirmation view. On failure
    /// the cart and the session (still at review) are untouched and the
    /// customer may resubmit.
    pub async fn place_order(
        &mut self,
        gateway: &dyn OrderGateway,
    ) -> Result<Order, StoreError> {
        let flow = self.checkout.as_ref().ok_or(StoreError::NoActiveCheckout)?;
        if !flow.is_at_review() {
            return Err(StoreError::NotAtReview(flow.step.as_str()));
        }

        let draft = OrderDraft {
            line_items: self.cart.entries().to_vec(),
            totals: self.totals(),
            shipping: flow.shipping.clone(),
            payment_method: flow.payment_method,
        };
        info!(
            items = draft.line_items.len(),
            total = %draft.totals.total,
            method = draft.payment_method.as_str(),
            "submitting order"
        );

        match gateway.submit(draft).await {
            Ok(order) => {
                self.cart.clear();
                self.checkout = None;
                info!(order_number = %order.order_number, "order confirmed");
                Ok(order)
            }
            Err(e) => {
                warn!(error = %e, "order submission failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SimulatedGateway;
    use souq_commerce::catalog::LocalizedText;
    use souq_commerce::checkout::{CheckoutStep, OrderStatus, PaymentMethod, ShippingDetails};
    use souq_commerce::CommerceError;
    use std::time::Duration;

    fn product(id: &str, price_pounds: f64, stock: i64) -> Product {
        Product::new(
            ProductId::new(id),
            LocalizedText::new(id, id),
            Money::from_pounds(price_pounds),
            stock,
        )
    }

    fn color() -> ColorVariant {
        ColorVariant::new(
            "black",
            LocalizedText::new("Black", "\u{0623}\u{0633}\u{0648}\u{062f}"),
            "#000",
            "/img/black.jpg",
        )
    }

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

    fn store_at_review() -> StorefrontStore {
        let mut store = StorefrontStore::new();
        store
            .add_to_cart(&product("p1", 800.0, 10), "M", color(), 2)
            .unwrap();

        let flow = store.begin_checkout();
        flow.set_shipping(filled_shipping());
        flow.advance().unwrap();
        flow.set_payment_method(PaymentMethod::CashOnDelivery);
        flow.advance().unwrap();
        store
    }

    #[test]
    fn test_cart_roundtrip_through_store() {
        let mut store = StorefrontStore::new();
        let id = store
            .add_to_cart(&product("p1", 450.0, 10), "M", color(), 2)
            .unwrap();

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.subtotal(), Money::from_pounds(900.0));

        store.update_quantity(&id, 1).unwrap();
        assert_eq!(store.item_count(), 1);

        assert!(store.remove_from_cart(&id));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_rejected_update_leaves_store_valid() {
        let mut store = StorefrontStore::new();
        let id = store
            .add_to_cart(&product("p1", 450.0, 3), "M", color(), 2)
            .unwrap();

        let result = store.update_quantity(&id, 7);
        assert!(matches!(
            result,
            Err(StoreError::Commerce(CommerceError::InsufficientStock { .. }))
        ));
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn test_wishlist_through_store() {
        let mut store = StorefrontStore::new();
        assert!(store.toggle_wishlist(ProductId::new("p1")));
        assert!(store.in_wishlist(&ProductId::new("p1")));
        assert!(!store.toggle_wishlist(ProductId::new("p1")));
        assert!(!store.in_wishlist(&ProductId::new("p1")));
    }

    #[test]
    fn test_display_price_follows_selected_currency() {
        let mut store = StorefrontStore::new();
        store
            .add_to_cart(&product("p1", 800.0, 10), "M", color(), 2)
            .unwrap();

        assert_eq!(store.display_price(store.subtotal()), "E\u{00a3}1600.00");

        store.set_display_currency(Currency::USD);
        assert_eq!(store.display_price(store.subtotal()), "$53.33");

        // Conversion is display-only; the pipeline still runs in base
        // currency.
        assert_eq!(store.totals().subtotal, Money::from_pounds(1600.0));
    }

    #[test]
    fn test_begin_checkout_replaces_stale_session() {
        let mut store = StorefrontStore::new();
        store.begin_checkout().set_shipping(filled_shipping());
        assert!(store.checkout().unwrap().shipping.is_complete());

        store.begin_checkout();
        assert!(!store.checkout().unwrap().shipping.is_complete());
        assert_eq!(store.checkout().unwrap().step, CheckoutStep::ShippingInfo);
    }

    #[tokio::test]
    async fn test_place_order_success_clears_cart_and_session() {
        let mut store = store_at_review();
        let gateway = SimulatedGateway::accepting().with_delay(Duration::from_millis(1));

        let order = store.place_order(&gateway).await.unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.totals.total, Money::from_pounds(1824.0));
        assert_eq!(order.item_count(), 2);

        assert!(store.cart().is_empty());
        assert!(store.checkout().is_none());
    }

    #[tokio::test]
    async fn test_place_order_failure_leaves_review_intact() {
        let mut store = store_at_review();
        let gateway = SimulatedGateway::rejecting().with_delay(Duration::from_millis(1));

        let result = store.place_order(&gateway).await;
        assert!(matches!(result, Err(StoreError::SubmissionFailed(_))));

        // Cart and session survive; the customer may resubmit.
        assert_eq!(store.item_count(), 2);
        let flow = store.checkout().unwrap();
        assert!(flow.is_at_review());

        let gateway = SimulatedGateway::accepting().with_delay(Duration::from_millis(1));
        assert!(store.place_order(&gateway).await.is_ok());
    }

    #[tokio::test]
    async fn test_place_order_requires_review_step() {
        let mut store = StorefrontStore::new();
        let gateway = SimulatedGateway::accepting().with_delay(Duration::from_millis(1));

        let result = store.place_order(&gateway).await;
        assert!(matches!(result, Err(StoreError::NoActiveCheckout)));

        store.begin_checkout();
        let result = store.place_order(&gateway).await;
        assert!(matches!(result, Err(StoreError::NotAtReview(_))));
    }

    #[test]
    fn test_store_state_serializes() {
        let store = store_at_review();
        let json = serde_json::to_string(&store).unwrap();
        let restored: StorefrontStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.item_count(), store.item_count());
        assert_eq!(restored.totals(), store.totals());
    }
}
