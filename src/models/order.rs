use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OrderLine — the checkout wire format
// ---------------------------------------------------------------------------

/// One `{productId, quantity}` pair submitted at checkout.
///
/// Prices are deliberately absent: the backend is authoritative for pricing
/// and recomputes the total from its own catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: u64,
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// OrderConfirmation — successful submission
// ---------------------------------------------------------------------------

/// The backend's confirmation of a submitted order.
///
/// `total` is the authoritative charged amount and may differ from the
/// cart's advisory [`total()`](crate::cart::Cart::total) if prices changed
/// between catalog load and checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: u64,
    pub total: f64,
}

// ---------------------------------------------------------------------------
// CheckoutRejection — machine-readable submission failure
// ---------------------------------------------------------------------------

/// Why the backend refused an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum RejectionReason {
    /// Stock changed between catalog load and checkout; `available` is the
    /// quantity still purchasable.
    #[serde(rename_all = "camelCase")]
    InsufficientStock { product_id: u64, available: u32 },
    /// The product was removed from sale entirely.
    #[serde(rename_all = "camelCase")]
    ProductUnavailable { product_id: u64 },
    /// Any other machine-readable reason the backend reports.
    Other,
}

/// A rejected checkout. The cart that produced it is left untouched so the
/// caller can adjust quantities and resubmit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRejection {
    #[serde(flatten)]
    pub reason: RejectionReason,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for CheckoutRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectionReason::InsufficientStock {
                product_id,
                available,
            } => write!(
                f,
                "insufficient stock for product {} (available: {})",
                product_id, available
            ),
            RejectionReason::ProductUnavailable { product_id } => {
                write!(f, "product {} is no longer available", product_id)
            }
            RejectionReason::Other => {
                if self.message.is_empty() {
                    write!(f, "order rejected")
                } else {
                    write!(f, "{}", self.message)
                }
            }
        }
    }
}
