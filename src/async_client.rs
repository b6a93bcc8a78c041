//! Async wrapper around [`BloomshopSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP transport waits on the backend.
//!
//! # Example
//!
//! ```no_run
//! use bloomshop_sdk::catalog::FilterCriteria;
//! use bloomshop_sdk::AsyncBloomshopSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncBloomshopSdk::builder()
//!         .base_url("https://shop.example.com/api")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let page = sdk.load_catalog(FilterCriteria::default()).await.unwrap();
//!     println!("{} products", page.products.len());
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::cart::Cart;
use crate::catalog::FilterCriteria;
use crate::error::{Result, ShopError};
use crate::models::{CatalogPage, OrderConfirmation};
use crate::BloomshopSdk;

// ---------------------------------------------------------------------------
// AsyncBloomshopSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncBloomshopSdk`] instance.
pub struct AsyncBloomshopSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    api_token: Option<String>,
}

impl Default for AsyncBloomshopSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: crate::config::DEFAULT_TIMEOUT,
            api_token: None,
        }
    }
}

impl AsyncBloomshopSdkBuilder {
    /// Set the backend base URL (required).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the bearer token attached to every request.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncBloomshopSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = BloomshopSdk::builder().timeout(self.timeout);
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(token) = self.api_token {
                builder = builder.api_token(token);
            }
            let sdk = builder.build()?;
            Ok(AsyncBloomshopSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| ShopError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncBloomshopSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`BloomshopSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The sync SDK is immutable and
/// `Send + Sync`, so it is shared with a plain [`Arc`] and concurrent calls
/// never contend on a lock.
///
/// Cart mutation stays caller-side: pass owned [`Cart`] values into
/// [`checkout()`](Self::checkout) and keep the returned cart on failure.
pub struct AsyncBloomshopSdk {
    inner: Arc<BloomshopSdk>,
}

impl AsyncBloomshopSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncBloomshopSdkBuilder {
        AsyncBloomshopSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&BloomshopSdk` reference and should return a
    /// `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bloomshop_sdk::AsyncBloomshopSdk;
    /// # async fn example() -> bloomshop_sdk::Result<()> {
    /// # let sdk = AsyncBloomshopSdk::builder().base_url("x").build().await?;
    /// let page = sdk.run(|s| s.catalog().load_all()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&BloomshopSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| ShopError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Load the catalog asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`CatalogApi::load()`](crate::api::CatalogApi::load). Callers racing
    /// several loads should pair this with a
    /// [`RequestSequence`](crate::transport::RequestSequence) and discard
    /// results whose token is no longer current.
    pub async fn load_catalog(&self, criteria: FilterCriteria) -> Result<CatalogPage> {
        self.run(move |s| s.catalog().load(&criteria)).await
    }

    /// Submit `cart` for checkout asynchronously.
    ///
    /// On success returns the confirmation and an emptied cart; on failure
    /// the error carries the rejection and the cart comes back untouched so
    /// the caller can adjust and resubmit.
    pub async fn checkout(
        &self,
        mut cart: Cart,
    ) -> std::result::Result<(OrderConfirmation, Cart), (ShopError, Cart)> {
        let sdk = self.inner.clone();
        let joined = tokio::task::spawn_blocking(move || {
            let result = sdk.orders().checkout(&mut cart);
            (result, cart)
        })
        .await;
        match joined {
            Ok((Ok(confirmation), cart)) => Ok((confirmation, cart)),
            Ok((Err(err), cart)) => Err((err, cart)),
            // A join error means the blocking task panicked; the cart moved
            // into it and cannot be recovered.
            Err(e) => Err((
                ShopError::InvalidArgument(format!("Task join error: {e}")),
                Cart::new(),
            )),
        }
    }
}
