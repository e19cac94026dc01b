//! # Cart
//!
//! The shopping cart and its lines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Front End Action         ShopState               Cart Change           │
//! │  ────────────────         ─────────               ───────────           │
//! │                                                                         │
//! │  Tap product card ───────► add_to_cart() ───────► qty += 1 or push     │
//! │                                                                         │
//! │  Stepper +/- ────────────► update_quantity() ───► lines[i].qty = n     │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_from_cart() ──► lines.remove(i)      │
//! │                                                                         │
//! │  Confirm logout ─────────► logout() ────────────► lines.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id (adding again increments quantity)
//! - Lines keep the order in which products were first added
//! - Every quantity is at least 1

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLineId, Product, ProductId};

/// A product in the cart together with how many of it the customer wants.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Line identity, independent of the product id.
    pub id: CartLineId,

    /// The catalog product. Catalog products never change, so this copy
    /// cannot drift from the catalog entry.
    pub product: Product,

    /// Number of units, always >= 1.
    pub quantity: u32,

    /// When the product first landed in the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Starts a new line with a quantity of one.
    pub fn new(product: &Product) -> Self {
        CartLine {
            id: CartLineId::new(),
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: its line's quantity goes up by one
    /// - Product not in cart: a new line with quantity 1 is appended
    ///
    /// Returns the line that now holds the product.
    ///
    /// ## Errors
    /// `CoreError::QuantityOverflow` if the line is already at `u32::MAX`.
    /// The line is left unchanged.
    pub fn add_product(&mut self, product: &Product) -> CoreResult<&CartLine> {
        let index = match self.position_of_product(product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line
                    .quantity
                    .checked_add(1)
                    .ok_or(CoreError::QuantityOverflow(line.id))?;
                index
            }
            None => {
                self.lines.push(CartLine::new(product));
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[index])
    }

    /// Sets a line's quantity verbatim.
    ///
    /// Returns `false` (and changes nothing) when the line is not in the
    /// cart. The caller is responsible for rejecting zero.
    pub fn set_quantity(&mut self, line_id: CartLineId, quantity: u32) -> bool {
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes a line, returning it if it was present.
    pub fn remove_line(&mut self, line_id: CartLineId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.id == line_id)?;
        Some(self.lines.remove(index))
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Lines in first-added order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, line_id: CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    pub fn line_for_product(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    fn position_of_product(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price × quantity` over all lines, recomputed on every call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for API responses and the cart badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}
