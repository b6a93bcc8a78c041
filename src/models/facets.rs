use serde::{Deserialize, Serialize};

use super::product::Product;

// ---------------------------------------------------------------------------
// Filter facets — backend-computed aggregates for the filter sidebar
// ---------------------------------------------------------------------------

/// An id/name pair used for groups, heights, qualities and origins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdName {
    pub id: u64,
    pub name: String,
}

/// An available color together with the number of matching products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorFacet {
    pub id: u64,
    pub name: String,
    pub count: u32,
}

/// The filter facets the backend computes alongside a catalog load.
///
/// `price_min`/`price_max` are the observed price bounds of the full
/// catalog; until they arrive the client filters with `[0, +inf)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterFacets {
    #[serde(default)]
    pub colors: Vec<ColorFacet>,
    #[serde(default)]
    pub groups: Vec<IdName>,
    #[serde(default)]
    pub heights: Vec<IdName>,
    #[serde(default)]
    pub qualities: Vec<IdName>,
    #[serde(default)]
    pub origins: Vec<IdName>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

// ---------------------------------------------------------------------------
// CatalogPage — one catalog load
// ---------------------------------------------------------------------------

/// The response body of a catalog load: products plus filter facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub facets: FilterFacets,
}
