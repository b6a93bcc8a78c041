//! Bloomshop SDK for Rust.
//!
//! Client-side model for the Bloomshop wholesale flower webshop: load the
//! product catalog and its filter facets from the backend, refine the
//! snapshot with the pure in-memory filter, manage a stock-clamped cart
//! ledger, and submit the cart for checkout. The backend stays
//! authoritative for pricing, stock, and order persistence; everything this
//! crate computes is advisory display state.
//!
//! # Quick start
//!
//! ```no_run
//! use bloomshop_sdk::catalog::{filter_catalog, FilterCriteria};
//! use bloomshop_sdk::{BloomshopSdk, Cart};
//!
//! let sdk = BloomshopSdk::builder()
//!     .base_url("https://shop.example.com/api")
//!     .build()
//!     .unwrap();
//!
//! let page = sdk.catalog().load_all().unwrap();
//!
//! let criteria = FilterCriteria {
//!     search: Some("rose".to_string()),
//!     ..Default::default()
//! };
//! let visible = filter_catalog(&page.products, &criteria);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&visible[0], 3);
//! let confirmation = sdk.orders().checkout(&mut cart).unwrap();
//! println!("order {} charged {:.2}", confirmation.order_id, confirmation.total);
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

#[cfg(feature = "async")]
pub mod async_client;

#[cfg(feature = "async")]
pub use async_client::AsyncBloomshopSdk;
pub use cart::{AddOutcome, Cart, CartLine};
pub use catalog::{filter_catalog, sort_catalog, FilterCriteria, SortDirection, SortKey};
pub use error::{Result, ShopError};
pub use transport::{HttpTransport, LoadToken, RequestSequence};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// BloomshopSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BloomshopSdk`] instance.
///
/// Use [`BloomshopSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](BloomshopSdkBuilder::build) to create the SDK.
pub struct BloomshopSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    api_token: Option<String>,
}

impl Default for BloomshopSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            api_token: None,
        }
    }
}

impl BloomshopSdkBuilder {
    /// Set the backend base URL (required), e.g. `https://shop.example.com/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the bearer token attached to every request.
    ///
    /// The webshop backend requires a customer session token for both
    /// catalog loads and checkout; leave unset for anonymous endpoints.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Build the SDK, initializing the HTTP transport.
    ///
    /// Fails with [`ShopError::InvalidArgument`] when no base URL was
    /// configured. No network traffic happens here; the first request is
    /// issued by the first catalog load or checkout.
    pub fn build(self) -> Result<BloomshopSdk> {
        let base_url = self.base_url.ok_or_else(|| {
            ShopError::InvalidArgument("base_url is required".to_string())
        })?;
        let transport = HttpTransport::new(&base_url, self.timeout, self.api_token)?;
        Ok(BloomshopSdk { transport })
    }
}

// ---------------------------------------------------------------------------
// BloomshopSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Bloomshop SDK.
///
/// Owns the [`HttpTransport`] and exposes the backend APIs as lightweight
/// borrowing wrappers. Created via [`BloomshopSdk::builder()`].
///
/// The SDK itself is stateless between calls: catalog snapshots live with
/// the caller and the cart is an independent [`Cart`] value, so one SDK can
/// serve any number of carts.
pub struct BloomshopSdk {
    transport: HttpTransport,
}

impl BloomshopSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> BloomshopSdkBuilder {
        BloomshopSdkBuilder::default()
    }

    // -- API accessors -----------------------------------------------------

    /// Access the catalog API.
    pub fn catalog(&self) -> api::CatalogApi<'_> {
        api::CatalogApi::new(&self.transport)
    }

    /// Access the order submission API.
    pub fn orders(&self) -> api::OrderApi<'_> {
        api::OrderApi::new(&self.transport)
    }

    /// Return a reference to the underlying [`HttpTransport`] for advanced usage.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}

impl fmt::Display for BloomshopSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BloomshopSdk(base_url={})", self.transport.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        let result = BloomshopSdk::builder().build();
        assert!(matches!(result, Err(ShopError::InvalidArgument(_))));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let sdk = BloomshopSdk::builder()
            .base_url("https://shop.example.com/api/")
            .build()
            .unwrap();
        assert_eq!(sdk.transport().base_url(), "https://shop.example.com/api");
        assert_eq!(
            sdk.to_string(),
            "BloomshopSdk(base_url=https://shop.example.com/api)"
        );
    }
}
