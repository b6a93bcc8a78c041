use std::time::Duration;

/// Catalog endpoint, relative to the configured base URL.
///
/// Responds to GET with optional query parameters mirroring
/// [`FilterCriteria`](crate::catalog::FilterCriteria) fields and returns the
/// product list together with the computed filter facets.
pub const CATALOG_PATH: &str = "webshop/catalog";

/// Order submission endpoint, relative to the configured base URL.
///
/// Accepts a POST body of `[{productId, quantity}]` pairs and returns the
/// authoritative order confirmation, or a machine-readable rejection.
pub const ORDERS_PATH: &str = "webshop/orders";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of redirects the HTTP client follows.
pub const MAX_REDIRECTS: usize = 10;
