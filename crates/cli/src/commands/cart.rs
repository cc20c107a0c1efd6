//! Cart and checkout commands.

use clap::{Args, Subcommand};

use zenith_core::ProductId;
use zenith_storefront::api::types::ShippingAddress;
use zenith_storefront::error::ApiError;
use zenith_storefront::pages::cart::{self, CartPage};
use zenith_storefront::pages::checkout::{CheckoutFlow, CheckoutLoad};
use zenith_storefront::pages::products::add_to_cart;

use super::Context;

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart with its order summary
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: i64,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity (zero removes the line)
    Update {
        /// Product id
        id: i64,

        /// New quantity
        quantity: i64,
    },
    /// Remove a line
    Remove {
        /// Product id
        id: i64,
    },
    /// Remove every line
    Clear,
}

pub async fn run(ctx: &mut Context, action: CartAction) -> Result<(), ApiError> {
    match action {
        CartAction::Show => {
            let page = cart::load_cart(&ctx.api).await?;
            print_cart(&page);
        }
        CartAction::Add { id, quantity } => {
            let count = add_to_cart(&ctx.api, ProductId::new(id), quantity.max(1)).await?;
            println!("Added to cart! ({count} items total)");
        }
        CartAction::Update { id, quantity } => {
            let lines = ctx.api.cart().await?;
            let page =
                cart::change_quantity(&ctx.api, lines, ProductId::new(id), quantity).await?;
            print_cart(&page);
        }
        CartAction::Remove { id } => {
            let lines = ctx.api.cart().await?;
            let page = cart::remove_item(&ctx.api, lines, ProductId::new(id)).await?;
            print_cart(&page);
        }
        CartAction::Clear => {
            let page = cart::clear(&ctx.api).await?;
            print_cart(&page);
        }
    }
    Ok(())
}

fn print_cart(page: &CartPage) {
    if page.is_empty() {
        println!("Your cart is empty. Browse products to get started!");
        return;
    }

    for item in &page.items {
        println!(
            "  #{:<4} {:<28} {:>3} x {:>12} = {:>14}",
            item.product_id, item.name, item.quantity, item.unit_price, item.line_total
        );
    }

    if let Some(summary) = &page.summary {
        println!();
        println!("  {:<12} {:>14}", "Subtotal", summary.subtotal);
        println!("  {:<12} {:>14}", "Shipping", summary.shipping);
        println!("  {:<12} {:>14}", "Tax (8%)", summary.tax);
        println!("  {:<12} {:>14}", "Total", summary.total);
    }
}

/// Arguments for `zenith checkout`. Omitted fields fall back to the profile's
/// stored address.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    #[arg(long)]
    zip: Option<String>,
}

pub async fn checkout(ctx: &mut Context, args: CheckoutArgs) -> Result<(), ApiError> {
    let mut flow = match CheckoutFlow::load(&ctx.api).await? {
        CheckoutLoad::EmptyCart => {
            println!("Your cart is empty");
            return Ok(());
        }
        CheckoutLoad::Ready(flow) => flow,
    };

    let review = flow.review();
    println!("Order Review");
    for item in &review.items {
        println!(
            "  {:<28} {:>3} x {:>12} = {:>14}",
            item.name, item.quantity, item.unit_price, item.line_total
        );
    }
    println!("  {:<12} {:>14}", "Subtotal", review.summary.subtotal);
    println!("  {:<12} {:>14}", "Shipping", review.summary.shipping);
    println!("  {:<12} {:>14}", "Tax (8%)", review.summary.tax);
    println!("  {:<12} {:>14}", "Total", review.summary.total);

    let prefill = flow.prefill();
    let shipping = ShippingAddress {
        address: args.address.unwrap_or(prefill.address),
        city: args.city.unwrap_or(prefill.city),
        state: args.state.unwrap_or(prefill.state),
        zip: args.zip.unwrap_or(prefill.zip),
    };

    let order = flow.place_order(&ctx.api, &shipping).await?;
    println!();
    println!("Order #{} placed! Total {}", order.order_id, zenith_core::format_usd(order.order_total));
    println!("A confirmation email is on its way. View it anytime with: zenith orders show {}", order.order_id);
    Ok(())
}
