//! Catalog loading against the webshop backend.

use crate::catalog::{query_pairs, FilterCriteria};
use crate::config;
use crate::error::Result;
use crate::models::CatalogPage;
use crate::transport::HttpTransport;

/// Query interface for the product catalog.
pub struct CatalogApi<'a> {
    transport: &'a HttpTransport,
}

impl<'a> CatalogApi<'a> {
    /// Create a new `CatalogApi` bound to the given transport.
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Load the catalog, optionally pre-filtered server-side.
    ///
    /// The set fields of `criteria` are mirrored as query parameters; the
    /// backend answers with the matching products and the computed filter
    /// facets (colors with counts, groups, price bounds, heights,
    /// qualities, origins). Client-side refinement of the returned snapshot
    /// goes through [`filter_catalog`](crate::catalog::filter_catalog).
    pub fn load(&self, criteria: &FilterCriteria) -> Result<CatalogPage> {
        let query = query_pairs(criteria);
        self.transport.get_json(config::CATALOG_PATH, &query)
    }

    /// Load the full, unfiltered catalog.
    pub fn load_all(&self) -> Result<CatalogPage> {
        self.load(&FilterCriteria::default())
    }
}
