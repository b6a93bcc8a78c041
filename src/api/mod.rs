//! API wrappers for the webshop backend.
//!
//! Each module provides a lightweight struct that borrows the SDK's
//! [`HttpTransport`](crate::transport::HttpTransport) and exposes methods
//! returning `Result<T>` with typed payloads.

pub mod catalog;
pub mod orders;

pub use catalog::CatalogApi;
pub use orders::OrderApi;
