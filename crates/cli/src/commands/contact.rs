//! Sales inquiry command.

use clap::Args;

use zenith_core::ProductId;
use zenith_storefront::error::ApiError;
use zenith_storefront::pages::contact::{InquiryForm, submit_inquiry};

use super::Context;

/// Arguments for `zenith inquiry`.
#[derive(Args)]
pub struct InquiryArgs {
    /// Product the inquiry is about
    #[arg(long)]
    product: Option<i64>,

    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    company: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long)]
    message: String,
}

pub async fn run(ctx: &Context, args: InquiryArgs) -> Result<(), ApiError> {
    let form = InquiryForm {
        product_id: args.product.map(ProductId::new),
        name: args.name,
        company: args.company,
        email: args.email,
        phone: args.phone,
        message: args.message,
    };

    let thanks = submit_inquiry(&ctx.api, &form).await?;
    println!("{thanks}");
    Ok(())
}
