//! Pure, in-memory catalog filtering and sorting.
//!
//! [`filter_catalog`] reduces a product snapshot against a [`FilterCriteria`]
//! with no I/O and no side effects; the output always preserves the relative
//! order of the input. Sorting is a separate, explicit step via
//! [`sort_catalog`] so the filter itself never reorders anything.
//!
//! # Example
//!
//! ```rust
//! use bloomshop_sdk::catalog::{filter_catalog, FilterCriteria};
//!
//! # let products = Vec::new();
//! let criteria = FilterCriteria {
//!     search: Some("naomi".to_string()),
//!     price_max: Some(2.0),
//!     ..Default::default()
//! };
//! let visible = filter_catalog(&products, &criteria);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Product;

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// The active catalog filters.
///
/// Every field is optional: `None` means "not filtering on this", which is
/// distinct from any set value (so a color id of `0` filters on color `0`
/// rather than being treated as unset). The whole record is a replaceable
/// value object; there are no partial-update semantics beyond overwriting
/// fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively as a substring of the
    /// product name and the `"group - name"` composite. Empty or unset
    /// matches everything.
    pub search: Option<String>,
    pub color: Option<u64>,
    pub group: Option<u64>,
    pub height: Option<u64>,
    pub quality: Option<u64>,
    pub origin: Option<u64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterCriteria {
    /// The effective inclusive price range.
    ///
    /// Unset bounds default to `[0, +inf)`. A reversed range (`min > max`)
    /// is normalized by swapping rather than rejected, so the filter stays
    /// total on any input.
    pub fn price_bounds(&self) -> (f64, f64) {
        let min = self.price_min.unwrap_or(0.0);
        let max = self.price_max.unwrap_or(f64::INFINITY);
        if min > max {
            (max, min)
        } else {
            (min, max)
        }
    }

    /// Whether a product passes every active criterion (logical AND).
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let name = product.name.to_lowercase();
                let composite = product.composite_name().to_lowercase();
                if !name.contains(&needle) && !composite.contains(&needle) {
                    return false;
                }
            }
        }
        if let Some(color) = self.color {
            if product.color_id != color {
                return false;
            }
        }
        if let Some(group) = self.group {
            if product.group_id != group {
                return false;
            }
        }
        if let Some(height) = self.height {
            if product.height_id != Some(height) {
                return false;
            }
        }
        if let Some(quality) = self.quality {
            if product.quality_id != Some(quality) {
                return false;
            }
        }
        if let Some(origin) = self.origin {
            if product.origin_id != Some(origin) {
                return false;
            }
        }
        let (min, max) = self.price_bounds();
        product.unit_price >= min && product.unit_price <= max
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Reduce `products` to the subset matching `criteria`.
///
/// Pure and synchronous. The result is a subsequence of `products`: relative
/// order is preserved and nothing is re-sorted. An empty input yields an
/// empty output; this never panics.
pub fn filter_catalog(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// The field a catalog sort is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Stable sort of a (typically already filtered) product list.
///
/// Price comparison treats NaN as equal so the sort stays total; the
/// backend never reports NaN prices in practice.
pub fn sort_catalog(products: &mut [Product], key: SortKey, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Price => a
                .unit_price
                .partial_cmp(&b.unit_price)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

// ---------------------------------------------------------------------------
// Query-parameter mirror
// ---------------------------------------------------------------------------

/// The query-string pairs the catalog endpoint accepts, mirroring the set
/// fields of `criteria`. Unset fields produce no pair; a blank search string
/// is also skipped.
pub fn query_pairs(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(search) = &criteria.search {
        let trimmed = search.trim();
        if !trimmed.is_empty() {
            pairs.push(("search", trimmed.to_string()));
        }
    }
    if let Some(color) = criteria.color {
        pairs.push(("color", color.to_string()));
    }
    if let Some(group) = criteria.group {
        pairs.push(("group", group.to_string()));
    }
    if let Some(height) = criteria.height {
        pairs.push(("height", height.to_string()));
    }
    if let Some(quality) = criteria.quality {
        pairs.push(("quality", quality.to_string()));
    }
    if let Some(origin) = criteria.origin {
        pairs.push(("origin", origin.to_string()));
    }
    if criteria.price_min.is_some() || criteria.price_max.is_some() {
        let (min, max) = criteria.price_bounds();
        pairs.push(("priceMin", format!("{}", min)));
        if max.is_finite() {
            pairs.push(("priceMax", format!("{}", max)));
        }
    }
    pairs
}
