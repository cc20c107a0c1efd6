//! Catalog browsing and comparison commands.

use clap::Subcommand;
use rust_decimal::Decimal;

use zenith_core::compare::CompareStage;
use zenith_core::{CategoryId, ProductId};
use zenith_storefront::api::types::ProductFilters;
use zenith_storefront::error::ApiError;
use zenith_storefront::pages::compare::CompareFlow;
use zenith_storefront::pages::products::{
    ProductKind, add_to_compare, load_product_detail, load_products,
};

use super::Context;

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List products
    List {
        /// Robots only (categories 1-6)
        #[arg(long, conflicts_with = "accessories")]
        robots: bool,

        /// Accessories only (category 7)
        #[arg(long)]
        accessories: bool,

        /// Filter by category id
        #[arg(long)]
        cat: Option<i64>,

        /// Minimum price
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Filter by color
        #[arg(long)]
        color: Option<String>,
    },
    /// Show one product with its spec sheet and purchase gate
    Show {
        /// Product id
        id: i64,
    },
    /// Add a product to the comparison list
    CompareAdd {
        /// Product id
        id: i64,
    },
    /// Remove a product from the comparison list
    CompareRemove {
        /// Product id
        id: i64,
    },
    /// Compare the selected products side by side
    Compare,
    /// Clear the comparison list
    CompareClear,
}

pub async fn run(ctx: &mut Context, action: ProductsAction) -> Result<(), ApiError> {
    match action {
        ProductsAction::List {
            robots,
            accessories,
            cat,
            min_price,
            max_price,
            color,
        } => {
            let kind = if robots {
                ProductKind::Robots
            } else if accessories {
                ProductKind::Accessories
            } else {
                ProductKind::All
            };
            let filters = ProductFilters {
                cat: cat.map(CategoryId::new),
                min_price,
                max_price,
                color,
            };

            let page = load_products(&ctx.api, &filters, kind).await?;
            println!("{} ({} products)", page.heading, page.count);
            for card in &page.cards {
                println!("  #{:<4} {:<28} {:>14}  {}", card.product_id, card.name, card.price, card.teaser);
            }
        }
        ProductsAction::Show { id } => {
            let page =
                load_product_detail(&ctx.api, &ctx.store, ProductId::new(id)).await?;

            println!("{}  {}", page.product.name, page.price);
            if let Some(color) = &page.product.color {
                println!("Color: {color}");
            }
            if !page.requirement_text.is_empty() {
                println!("Restriction: {}", page.requirement_text);
            }
            if let Some(warning) = &page.warning {
                println!("!! {} - {}", warning.title, warning.message);
            }
            if let Some(notice) = &page.login_notice {
                println!("Note: {notice}");
            }
            println!("[{}]", page.button.label());
            println!();
            println!("{}", page.product.description);

            if let Some(model) = &page.product.ai_model {
                println!();
                println!("Specifications:");
                println!("  AI Model:  {model}");
                spec_line("Height", page.product.height_cm, "cm");
                spec_line("Weight", page.product.weight_kg, "kg");
                spec_line("Payload", page.product.payload_kg, "kg");
                spec_line("Battery", page.product.battery_hours, "hours");
                spec_line("Max Speed", page.product.speed_kmh, "km/h");
            }

            if !page.accessories.is_empty() {
                println!();
                println!("Compatible accessories:");
                for accessory in &page.accessories {
                    println!("  #{:<4} {:<28} {}", accessory.product_id, accessory.name, accessory.price);
                }
            }
        }
        ProductsAction::CompareAdd { id } => {
            let notice = add_to_compare(&mut ctx.store, ProductId::new(id))?;
            println!("{}", notice.message());
        }
        ProductsAction::CompareRemove { id } => {
            let mut flow = CompareFlow::from_store(&ctx.store);
            flow.unpick(&mut ctx.store, ProductId::new(id))?;
            println!("Removed from comparison ({} selected)", flow.selection().len());
        }
        ProductsAction::Compare => {
            let mut flow = CompareFlow::from_store(&ctx.store);
            let view = flow.compare(&ctx.api).await?;
            debug_assert_eq!(flow.stage(), CompareStage::Comparing);

            let names: Vec<&str> = view.cards.iter().map(|c| c.name.as_str()).collect();
            println!("Comparing: {}", names.join(" vs "));
            for card in &view.cards {
                println!("  #{:<4} {:<28} {}", card.product_id, card.name, card.price);
            }
            println!();
            for row in &view.rows {
                println!("  {:<18} {}", row.label, row.values.join(" | "));
            }
        }
        ProductsAction::CompareClear => {
            let mut flow = CompareFlow::from_store(&ctx.store);
            flow.clear(&mut ctx.store)?;
            println!("Comparison list cleared");
        }
    }
    Ok(())
}

fn spec_line(label: &str, value: Option<Decimal>, unit: &str) {
    if let Some(value) = value {
        println!("  {label:<9}  {value} {unit}");
    }
}
