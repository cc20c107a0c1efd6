//! Profile commands.

use clap::Subcommand;

use zenith_storefront::error::ApiError;
use zenith_storefront::pages::profile::{load, update};

use super::Context;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show your profile
    Show,
    /// Update profile fields (unset fields keep their current value)
    Update {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        zip: Option<String>,
    },
}

pub async fn run(ctx: &Context, action: ProfileAction) -> Result<(), ApiError> {
    match action {
        ProfileAction::Show => {
            let (_, view) = load(&ctx.api).await?;
            print_view(&view);
        }
        ProfileAction::Update {
            first_name,
            last_name,
            email,
            phone,
            address,
            city,
            state,
            zip,
        } => {
            let (mut profile, _) = load(&ctx.api).await?;

            let apply = |field: &mut String, value: Option<String>| {
                if let Some(value) = value {
                    *field = value;
                }
            };
            apply(&mut profile.first_name, first_name);
            apply(&mut profile.last_name, last_name);
            apply(&mut profile.email, email);
            apply(&mut profile.phone, phone);
            apply(&mut profile.address, address);
            apply(&mut profile.city, city);
            apply(&mut profile.state, state);
            apply(&mut profile.zip, zip);

            let (_, view) = update(&ctx.api, profile).await?;
            println!("Profile updated successfully!");
            println!();
            print_view(&view);
        }
    }
    Ok(())
}

fn print_view(view: &zenith_storefront::pages::profile::ProfileView) {
    println!("{}  ({})", view.full_name, view.initials);
    println!("  Email:        {}", view.email);
    println!("  Account Type: {}", view.account_type);
    if let Some(company) = &view.company_name {
        println!("  Company:      {company}");
    }
    if let Some(phone) = &view.phone {
        println!("  Phone:        {phone}");
    }
}
