//! Cart normalization, totals, and quantity reconciliation.
//!
//! The backend is the source of truth for the cart, but it is not consistent
//! about the shape of `items`: depending on the endpoint it returns either an
//! ordered JSON sequence of entries or an object keyed by product id. The
//! shape is captured once at the boundary as the [`CartItems`] union and
//! normalized immediately into a flat `Vec<CartLine>`; nothing downstream
//! branches on shape again.
//!
//! Quantity semantics: a requested quantity below 1 means "remove the line",
//! never "keep a zero-quantity line". Updating a product that is not in the
//! cart is a no-op.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{BuyerRequirement, ProductId};

/// Sales tax applied to every order.
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.08);

/// Flat shipping cost. The storefront ships everything free.
pub const SHIPPING_FLAT: Decimal = Decimal::ZERO;

// =============================================================================
// Wire Shapes
// =============================================================================

/// Raw cart payload as returned by `GET /cart`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartPayload {
    /// `None` covers both a missing field and an explicit `null`.
    #[serde(default)]
    pub items: Option<CartItems>,
}

impl CartPayload {
    /// Normalize into the canonical line sequence. Missing or `null` items
    /// yield an empty cart.
    #[must_use]
    pub fn normalize(self) -> Vec<CartLine> {
        self.items.map_or_else(Vec::new, CartItems::normalize)
    }
}

/// The two wire shapes of the cart `items` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CartItems {
    /// Ordered sequence of entries.
    Sequence(Vec<CartEntry>),
    /// Object keyed by product id.
    Keyed(BTreeMap<String, CartEntry>),
}

impl CartItems {
    /// Flatten either shape into cart lines.
    ///
    /// Sequence input preserves its order; keyed input is sorted by product
    /// id so equal content yields equal output regardless of shape. Entries
    /// with a non-positive quantity are dropped (they are removals the
    /// backend has not compacted yet).
    #[must_use]
    pub fn normalize(self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = match self {
            Self::Sequence(entries) => entries.into_iter().filter_map(CartEntry::into_line).collect(),
            Self::Keyed(map) => {
                let mut lines: Vec<CartLine> = map
                    .into_values()
                    .filter_map(CartEntry::into_line)
                    .collect();
                lines.sort_by_key(|line| line.product_id);
                lines
            }
        };
        lines.dedup_by_key(|line| line.product_id);
        lines
    }
}

/// One raw entry within the cart payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product: CartEntryProduct,
    #[serde(default)]
    pub quantity: i64,
}

impl CartEntry {
    fn into_line(self) -> Option<CartLine> {
        let quantity = u32::try_from(self.quantity).ok().filter(|&q| q > 0)?;
        Some(CartLine {
            product_id: self.product.product_id,
            quantity,
            unit_price: self.product.price,
            name: self.product.name,
            image_url: self.product.image_url,
            buyer_requirement: self.product.buyer_requirement,
        })
    }
}

/// Product summary embedded in a cart entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntryProduct {
    pub product_id: ProductId,
    #[serde(default)]
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub buyer_requirement: BuyerRequirement,
}

// =============================================================================
// Canonical Lines
// =============================================================================

/// One product-and-quantity entry within the cart, with the price snapshot
/// and restriction tag the checkout gate needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Always at least 1; a zero-quantity request removes the line instead.
    pub quantity: u32,
    /// Unit price at the time the cart was fetched.
    pub unit_price: Decimal,
    pub name: String,
    pub image_url: Option<String>,
    pub buyer_requirement: BuyerRequirement,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Replace the quantity of `product_id`, removing the line when the new
/// quantity is below 1. Unknown ids leave the lines unchanged.
#[must_use]
pub fn update_quantity(
    mut lines: Vec<CartLine>,
    product_id: ProductId,
    new_quantity: i64,
) -> Vec<CartLine> {
    match u32::try_from(new_quantity).ok().filter(|&q| q > 0) {
        Some(quantity) => {
            if let Some(line) = lines.iter_mut().find(|line| line.product_id == product_id) {
                line.quantity = quantity;
            }
            lines
        }
        None => {
            lines.retain(|line| line.product_id != product_id);
            lines
        }
    }
}

/// Total number of units across all lines (the nav badge count).
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

// =============================================================================
// Totals
// =============================================================================

/// Order summary amounts, exact to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals at the storefront's standard 8% tax rate.
    #[must_use]
    pub fn standard(lines: &[CartLine]) -> Self {
        Self::compute(lines, DEFAULT_TAX_RATE)
    }

    /// Compute totals at an explicit tax rate. Shipping is the flat-free
    /// policy constant.
    #[must_use]
    pub fn compute(lines: &[CartLine], tax_rate: Decimal) -> Self {
        let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal * tax_rate;
        let shipping = SHIPPING_FLAT;
        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}
