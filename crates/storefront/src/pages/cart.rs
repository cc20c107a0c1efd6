//! Cart page flow.
//!
//! Quantities route through the reconciliation rule: a decrement that lands
//! below one is a removal, and the server is told quantity zero, which its
//! cart endpoint treats the same way.

use zenith_core::ProductId;
use zenith_core::cart::{CartLine, CartTotals, item_count, update_quantity};
use zenith_core::format_usd;

use crate::api::ApiClient;
use crate::error::Result;

/// One rendered cart line.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            image_url: line.image_url.clone(),
            quantity: line.quantity,
            unit_price: format_usd(line.unit_price),
            line_total: format_usd(line.line_total()),
        }
    }
}

/// Order summary panel.
#[derive(Debug, Clone)]
pub struct CartSummaryView {
    pub subtotal: String,
    /// "Free" under the flat-free policy.
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl From<CartTotals> for CartSummaryView {
    fn from(totals: CartTotals) -> Self {
        Self {
            subtotal: format_usd(totals.subtotal),
            shipping: if totals.shipping.is_zero() {
                "Free".to_string()
            } else {
                format_usd(totals.shipping)
            },
            tax: format_usd(totals.tax),
            total: format_usd(totals.total),
        }
    }
}

/// The cart page.
#[derive(Debug, Clone)]
pub struct CartPage {
    pub items: Vec<CartItemView>,
    /// Absent when the cart is empty (the empty state has no summary panel).
    pub summary: Option<CartSummaryView>,
    pub item_count: u64,
}

impl CartPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn from_lines(lines: &[CartLine]) -> Self {
        let summary =
            (!lines.is_empty()).then(|| CartSummaryView::from(CartTotals::standard(lines)));
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            summary,
            item_count: item_count(lines),
        }
    }
}

/// Load the cart page.
pub async fn load_cart(api: &ApiClient) -> Result<CartPage> {
    let lines = api.cart().await?;
    Ok(CartPage::from_lines(&lines))
}

/// Set a line's quantity. Below one means removal; the local reconciliation
/// and the server agree on that.
pub async fn change_quantity(
    api: &ApiClient,
    lines: Vec<CartLine>,
    product_id: ProductId,
    new_quantity: i64,
) -> Result<CartPage> {
    let expected = update_quantity(lines, product_id, new_quantity);

    let server_quantity = u32::try_from(new_quantity.max(0)).unwrap_or(0);
    let server_lines = api.update_cart_item(product_id, server_quantity).await?;

    // The server owns the cart; the local reconciliation is a consistency
    // check against it.
    if item_count(&server_lines) != item_count(&expected) {
        tracing::debug!(
            local = item_count(&expected),
            server = item_count(&server_lines),
            "Server cart diverged from local reconciliation"
        );
    }

    Ok(CartPage::from_lines(&server_lines))
}

/// Remove a line entirely.
pub async fn remove_item(
    api: &ApiClient,
    lines: Vec<CartLine>,
    product_id: ProductId,
) -> Result<CartPage> {
    change_quantity(api, lines, product_id, 0).await
}

/// Remove every line.
pub async fn clear(api: &ApiClient) -> Result<CartPage> {
    api.clear_cart().await?;
    Ok(CartPage::from_lines(&[]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use zenith_core::BuyerRequirement;

    use super::*;

    fn line(id: i64, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            quantity,
            unit_price: dec!(100),
            name: format!("Robot {id}"),
            image_url: None,
            buyer_requirement: BuyerRequirement::None,
        }
    }

    #[test]
    fn test_empty_page_has_no_summary() {
        let page = CartPage::from_lines(&[]);
        assert!(page.is_empty());
        assert!(page.summary.is_none());
        assert_eq!(page.item_count, 0);
    }

    #[test]
    fn test_summary_formatting() {
        let page = CartPage::from_lines(&[line(1, 2)]);
        let summary = page.summary.unwrap();
        assert_eq!(summary.subtotal, "$200.00");
        assert_eq!(summary.shipping, "Free");
        assert_eq!(summary.tax, "$16.00");
        assert_eq!(summary.total, "$216.00");
    }

    #[test]
    fn test_item_view_totals() {
        let page = CartPage::from_lines(&[line(1, 3)]);
        assert_eq!(page.items[0].unit_price, "$100.00");
        assert_eq!(page.items[0].line_total, "$300.00");
        assert_eq!(page.item_count, 3);
    }
}
