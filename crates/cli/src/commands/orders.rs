//! Order history commands.

use clap::Subcommand;

use zenith_core::OrderId;
use zenith_storefront::error::ApiError;
use zenith_storefront::pages::orders::{confirmation, order_history};

use super::Context;

#[derive(Subcommand)]
pub enum OrdersAction {
    /// List your orders, newest first
    List,
    /// Show one order's confirmation
    Show {
        /// Order id
        id: i64,
    },
}

pub async fn run(ctx: &Context, action: OrdersAction) -> Result<(), ApiError> {
    match action {
        OrdersAction::List => {
            let entries = order_history(&ctx.api).await?;
            if entries.is_empty() {
                println!("No orders yet. Your order history will appear here.");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "  Order #{:<5} {:<18} {:>14}  {}",
                    entry.order_id, entry.date, entry.total, entry.address_line
                );
            }
        }
        OrdersAction::Show { id } => {
            let view = confirmation(&ctx.api, OrderId::new(id)).await?;
            println!("Order #{}", view.order_id);
            println!("Placed {}", view.date);
            println!();
            println!("Ship to:");
            for line in &view.address_lines {
                println!("  {line}");
            }
            println!();
            println!("  {:<12} {:>14}", "Subtotal", view.subtotal);
            println!("  {:<12} {:>14}", "Shipping", view.shipping);
            println!("  {:<12} {:>14}", "Tax (8%)", view.tax);
            println!("  {:<12} {:>14}", "Total", view.total);
        }
    }
    Ok(())
}
