//! The cart ledger: an in-memory mapping from product to requested quantity.
//!
//! Every mutation clamps quantities against the product's available stock,
//! so a stored line never holds a quantity outside `[1, available_qty]` and
//! a quantity of zero is never stored (the line is removed instead). All
//! operations are synchronous and total: invalid requests are resolved by
//! clamping or reported through [`AddOutcome`], never by panicking.
//!
//! The cart's [`total()`](Cart::total) is advisory display state. The
//! backend recomputes the authoritative total at checkout from the
//! [`order_lines()`](Cart::order_lines) serialization.

use crate::models::{OrderLine, Product};

/// Clamp `qty` into `[min, max]`. Single clamp helper used by every
/// mutation site so the ledger invariant holds by construction.
fn clamp(qty: u32, min: u32, max: u32) -> u32 {
    qty.max(min).min(max)
}

/// Round to two decimal places for presentation. Internal accumulation
/// keeps full precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// CartLine
// ---------------------------------------------------------------------------

/// One product in the cart with its requested quantity.
///
/// Holds a snapshot of the product as of the catalog load that produced it;
/// `quantity` is always within `[1, product.available_qty]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal at full precision.
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.product.unit_price
    }
}

// ---------------------------------------------------------------------------
// AddOutcome
// ---------------------------------------------------------------------------

/// What happened to an [`add_item`](Cart::add_item) request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The full requested quantity was stored.
    Added { quantity: u32 },
    /// The request exceeded available stock; the stored quantity was
    /// clamped down to it.
    AdjustedToStock { requested: u32, quantity: u32 },
    /// The product has no stock at all; the cart is unchanged.
    StockUnavailable,
}

// ---------------------------------------------------------------------------
// Cart
// ---------------------------------------------------------------------------

/// The cart ledger: insertion-ordered lines, at most one per product id.
///
/// Created empty at session start, mutated through the methods below, and
/// cleared after a successful checkout (see
/// [`OrderApi::checkout`](crate::api::orders::OrderApi::checkout)) or on
/// logout. Ephemeral by design: it lives only in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutations ---------------------------------------------------------

    /// Add `qty` units of `product`.
    ///
    /// If the product is not yet in the cart, a new line is inserted with
    /// `clamp(qty, 1, available)`. If it is, the existing quantity is
    /// incremented by `qty` and then clamped. A product with zero stock is
    /// never inserted; the call is a no-op reported as
    /// [`AddOutcome::StockUnavailable`].
    pub fn add_item(&mut self, product: &Product, qty: u32) -> AddOutcome {
        let available = product.available_qty;
        if available == 0 {
            return AddOutcome::StockUnavailable;
        }

        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                let requested = line.quantity.saturating_add(qty);
                line.quantity = clamp(requested, 1, available);
                if line.quantity < requested {
                    AddOutcome::AdjustedToStock {
                        requested,
                        quantity: line.quantity,
                    }
                } else {
                    AddOutcome::Added {
                        quantity: line.quantity,
                    }
                }
            }
            None => {
                let quantity = clamp(qty, 1, available);
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
                if quantity < qty {
                    AddOutcome::AdjustedToStock {
                        requested: qty,
                        quantity,
                    }
                } else {
                    AddOutcome::Added { quantity }
                }
            }
        }
    }

    /// Replace the quantity of the line for `product_id`.
    ///
    /// No-op returning `None` if the product is not in the cart. The new
    /// quantity is clamped to `[0, available]`; a resulting zero removes
    /// the line entirely. Returns the stored quantity (0 when removed).
    pub fn set_quantity(&mut self, product_id: u64, qty: u32) -> Option<u32> {
        let idx = self.lines.iter().position(|l| l.product.id == product_id)?;
        let available = self.lines[idx].product.available_qty;
        let stored = clamp(qty, 0, available);
        if stored == 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity = stored;
        }
        Some(stored)
    }

    /// Remove the line for `product_id`, returning it. No-op if absent.
    pub fn remove_item(&mut self, product_id: u64) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.product.id == product_id)?;
        Some(self.lines.remove(idx))
    }

    /// Empty the cart. Called after a successful checkout or on logout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Re-clamp every line against a fresh catalog snapshot.
    ///
    /// Stock can change between catalog load and checkout (another buyer
    /// may deplete it). Lines whose product disappeared from the snapshot
    /// or hit zero stock are dropped; the rest take the snapshot's stock
    /// and price and are clamped to the new availability.
    pub fn refresh_stock(&mut self, products: &[Product]) {
        self.lines.retain_mut(|line| {
            match products.iter().find(|p| p.id == line.product.id) {
                Some(fresh) if fresh.available_qty > 0 => {
                    line.product = fresh.clone();
                    line.quantity = clamp(line.quantity, 1, fresh.available_qty);
                    true
                }
                _ => false,
            }
        });
    }

    // -- Derived values ----------------------------------------------------

    /// Order total at full precision: Σ quantity × unit price.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Order total rounded to two decimals, for display only.
    pub fn rounded_total(&self) -> f64 {
        round2(self.total())
    }

    /// Serialize the cart into the checkout wire format.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine {
                product_id: l.product.id,
                quantity: l.quantity,
            })
            .collect()
    }

    // -- Accessors ---------------------------------------------------------

    pub fn get(&self, product_id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
