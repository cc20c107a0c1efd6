//! Zenith CLI - storefront front end for the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Log in and browse
//! zenith auth login -u asparks
//! zenith products list --robots
//! zenith products show 5
//!
//! # Cart and checkout
//! zenith cart add 5 --quantity 2
//! zenith cart show
//! zenith checkout
//!
//! # Compare robots
//! zenith products compare-add 5
//! zenith products compare-add 6
//! zenith products compare
//! ```
//!
//! # Commands
//!
//! - `auth` - login, logout, register
//! - `products` - list, show, comparison
//! - `cart` - show, add, update, clear
//! - `checkout` - place an order from the cart
//! - `orders` - order history and confirmations
//! - `profile` - view and update the account profile
//! - `jobs` - open positions and applications
//! - `inquiry` - contact the sales team
//! - `admin` - read-only dashboards (orders, applications, inquiries)

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is this binary's whole purpose
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use zenith_storefront::api::ApiClient;
use zenith_storefront::config::ClientConfig;
use zenith_storefront::pages::auth::restore_session;
use zenith_storefront::session::SessionStore;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "zenith")]
#[command(author, version, about = "Zenith robotics storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, log out, or register
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Browse and compare products
    Products {
        #[command(subcommand)]
        action: commands::catalog::ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Place an order from the cart
    Checkout(commands::cart::CheckoutArgs),
    /// Order history
    Orders {
        #[command(subcommand)]
        action: commands::orders::OrdersAction,
    },
    /// View or update the account profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Open positions and applications
    Jobs {
        #[command(subcommand)]
        action: commands::careers::JobsAction,
    },
    /// Send a sales inquiry
    Inquiry(commands::contact::InquiryArgs),
    /// Read-only admin dashboards
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let api = ApiClient::new(&config)?;
    let store = SessionStore::open(config.session_file())?;
    restore_session(&api, &store);

    let mut ctx = Context { api, store };

    match cli.command {
        Commands::Auth { action } => commands::auth::run(&mut ctx, action).await?,
        Commands::Products { action } => commands::catalog::run(&mut ctx, action).await?,
        Commands::Cart { action } => commands::cart::run(&mut ctx, action).await?,
        Commands::Checkout(args) => commands::cart::checkout(&mut ctx, args).await?,
        Commands::Orders { action } => commands::orders::run(&ctx, action).await?,
        Commands::Profile { action } => commands::profile::run(&ctx, action).await?,
        Commands::Jobs { action } => commands::careers::run(&ctx, action).await?,
        Commands::Inquiry(args) => commands::contact::run(&ctx, args).await?,
        Commands::Admin { action } => commands::admin::run(&ctx, action).await?,
    }
    Ok(())
}
