//! Login, logout, and registration commands.

use std::io::{BufRead, Write};

use clap::Subcommand;

use zenith_storefront::auth::decode_claims;
use zenith_storefront::error::ApiError;
use zenith_storefront::pages::auth::{self, RegisterForm};

use super::Context;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Show the current session
    Whoami,
    /// Log in to the storefront
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log out (the comparison list is kept)
    Logout,
    /// Create a new account
    Register {
        #[arg(short, long)]
        username: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(short, long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },
}

pub async fn run(ctx: &mut Context, action: AuthAction) -> Result<(), ApiError> {
    match action {
        AuthAction::Whoami => {
            let Some(user) = ctx.store.user() else {
                println!("Not logged in");
                return Ok(());
            };
            println!("{} ({})", user.display_name(), user.account_type);

            if let Some(claims) = ctx.store.token().as_ref().and_then(decode_claims) {
                if claims.is_expired(chrono::Utc::now()) {
                    println!("Session expired; log in again");
                } else if let Some(subject) = claims.sub {
                    println!("Token issued to {subject}");
                }
            }
        }
        AuthAction::Login { username, password } => {
            let password = password.map_or_else(prompt_password, Ok)?;
            let outcome =
                auth::login(&ctx.api, &mut ctx.store, &username, &password, None).await?;
            println!("Logged in as {}", outcome.user_label);
        }
        AuthAction::Logout => {
            auth::logout(&ctx.api, &mut ctx.store)?;
            println!("Logged out");
        }
        AuthAction::Register {
            username,
            password,
            first_name,
            last_name,
            email,
            phone,
        } => {
            let password = password.map_or_else(prompt_password, Ok)?;
            let form = RegisterForm {
                username,
                confirm_password: password.clone(),
                password,
                first_name,
                last_name,
                email,
                phone,
            };
            let outcome = auth::register(&ctx.api, &mut ctx.store, &form, None).await?;
            println!("Account created. Logged in as {}", outcome.user_label);
        }
    }
    Ok(())
}

fn prompt_password() -> Result<String, ApiError> {
    print!("Password: ");
    std::io::stdout()
        .flush()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut password = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut password)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}
