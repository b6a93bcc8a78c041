//! Order submission against the webshop backend.

use crate::cart::Cart;
use crate::config;
use crate::error::{Result, ShopError};
use crate::models::OrderConfirmation;
use crate::transport::HttpTransport;

/// Submission interface for checkout.
pub struct OrderApi<'a> {
    transport: &'a HttpTransport,
}

impl<'a> OrderApi<'a> {
    /// Create a new `OrderApi` bound to the given transport.
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Submit the cart's lines for checkout without touching the cart.
    ///
    /// The backend is authoritative for pricing and stock: it may answer
    /// with a confirmation carrying the charged total, or reject the order
    /// (surfaced as [`ShopError::CheckoutRejected`]) when stock changed
    /// since the catalog was loaded. Submitting an empty cart is an
    /// [`ShopError::InvalidArgument`].
    pub fn submit(&self, cart: &Cart) -> Result<OrderConfirmation> {
        if cart.is_empty() {
            return Err(ShopError::InvalidArgument(
                "cannot submit an empty cart".to_string(),
            ));
        }
        self.transport
            .post_json(config::ORDERS_PATH, &cart.order_lines())
    }

    /// Submit the cart and clear it on success.
    ///
    /// On any error — including a checkout rejection — the cart is left
    /// intact so the caller can adjust quantities and resubmit.
    pub fn checkout(&self, cart: &mut Cart) -> Result<OrderConfirmation> {
        let confirmation = self.submit(cart)?;
        cart.clear();
        Ok(confirmation)
    }
}
