use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product — a catalog entry as reported by the backend
// ---------------------------------------------------------------------------

/// A single sellable product from the webshop catalog.
///
/// This is a read-only snapshot: the backend owns the product and is the
/// only party that mutates it. The filter engine and the cart treat every
/// field as immutable; in particular [`available_qty`](Self::available_qty)
/// is only as fresh as the last catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub group_id: u64,
    pub group_name: String,
    pub color_id: u64,
    pub color_name: String,
    /// Units currently in stock. Quantities in the cart are clamped to this.
    pub available_qty: u32,
    /// Unit sale price. Non-negative; advisory until the backend confirms
    /// the order total at checkout.
    pub unit_price: f64,
    /// Units per package ("imballo"), when the product ships in fixed packs.
    pub packaging: Option<u32>,
    pub stems_per_unit: Option<u32>,
    pub height_id: Option<u64>,
    pub quality_id: Option<u64>,
    pub origin_id: Option<u64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub has_image: bool,
}

impl Product {
    /// The `"group - name"` composite string the free-text search also
    /// matches against (e.g. `"Roses - Red Naomi"`).
    pub fn composite_name(&self) -> String {
        format!("{} - {}", self.group_name, self.name)
    }
}
