//! Read-only admin dashboards.

use clap::Subcommand;

use zenith_storefront::error::ApiError;
use zenith_storefront::pages::admin::{all_applications, all_inquiries, all_orders};

use super::Context;

#[derive(Subcommand)]
pub enum AdminAction {
    /// Every order across all users
    Orders,
    /// Every submitted job application
    Applications,
    /// Every sales inquiry
    Inquiries,
}

pub async fn run(ctx: &Context, action: AdminAction) -> Result<(), ApiError> {
    match action {
        AdminAction::Orders => {
            let rows = all_orders(&ctx.api, &ctx.store).await?;
            for row in rows {
                println!(
                    "  Order #{:<5} {:<18} {:>14}  {}",
                    row.order_id, row.date, row.total, row.destination
                );
            }
        }
        AdminAction::Applications => {
            let applications = all_applications(&ctx.api, &ctx.store).await?;
            for application in applications {
                println!(
                    "  #{:<4} job {:<4} {:<24} {:<28} {}",
                    application.application_id,
                    application.job_id,
                    application.applicant_name,
                    application.email,
                    application.status
                );
            }
        }
        AdminAction::Inquiries => {
            let inquiries = all_inquiries(&ctx.api, &ctx.store).await?;
            for inquiry in inquiries {
                let product = inquiry
                    .product_id
                    .map_or_else(|| "-".to_string(), |id| id.to_string());
                println!(
                    "  #{:<4} {:<24} {:<20} product {:<4} {}",
                    inquiry.inquiry_id,
                    inquiry.contact_name,
                    inquiry.company_name,
                    product,
                    inquiry.status
                );
            }
        }
    }
    Ok(())
}
