//! Order history and order confirmation flows.
//!
//! The backend stores one total per order (tax included). The confirmation
//! page derives the subtotal/tax split back out of that total at the
//! storefront's 8% rate, exactly as the order was priced.

use rust_decimal::Decimal;

use zenith_core::cart::DEFAULT_TAX_RATE;
use zenith_core::{OrderId, format_usd};

use crate::api::ApiClient;
use crate::api::types::Order;
use crate::error::Result;

use super::format_date;

/// One entry in the order history list.
#[derive(Debug, Clone)]
pub struct OrderHistoryEntry {
    pub order_id: OrderId,
    pub date: String,
    pub total: String,
    pub address_line: String,
}

impl From<&Order> for OrderHistoryEntry {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id,
            date: format_date(order.date),
            total: format_usd(order.order_total),
            address_line: format!(
                "{}, {}, {} {}",
                order.address, order.city, order.state, order.zip
            ),
        }
    }
}

/// Load the logged-in user's order history, newest first.
pub async fn order_history(api: &ApiClient) -> Result<Vec<OrderHistoryEntry>> {
    let mut orders = api.orders().await?;
    orders.sort_by(|a, b| b.date.cmp(&a.date).then(b.order_id.cmp(&a.order_id)));
    Ok(orders.iter().map(OrderHistoryEntry::from).collect())
}

/// The order confirmation page.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub date: String,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
    pub address_lines: Vec<String>,
}

/// Load the confirmation for a just-placed (or historical) order.
pub async fn confirmation(api: &ApiClient, id: OrderId) -> Result<OrderConfirmation> {
    let order = api.order(id).await?;
    Ok(build_confirmation(&order))
}

fn build_confirmation(order: &Order) -> OrderConfirmation {
    let (subtotal, tax) = split_total(order.order_total);

    OrderConfirmation {
        order_id: order.order_id,
        date: format_date(order.date),
        subtotal: format_usd(subtotal),
        shipping: "Free".to_string(),
        tax: format_usd(tax),
        total: format_usd(order.order_total),
        address_lines: vec![
            order.address.clone(),
            format!("{}, {} {}", order.city, order.state, order.zip),
        ],
    }
}

/// Derive (subtotal, tax) from a tax-inclusive total.
fn split_total(total: Decimal) -> (Decimal, Decimal) {
    let subtotal = (total / (Decimal::ONE + DEFAULT_TAX_RATE)).round_dp(2);
    (subtotal, total - subtotal)
}
