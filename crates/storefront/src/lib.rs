//! Zenith Storefront client library.
//!
//! Everything the storefront front ends need to talk to the Zenith backend:
//! a typed REST [`api::ApiClient`], the file-backed [`session::SessionStore`]
//! (token, user, comparison list), and the headless [`pages`] flows that the
//! CLI drives.
//!
//! # Example
//!
//! ```rust,ignore
//! use zenith_storefront::{api::ApiClient, config::ClientConfig, session::SessionStore};
//!
//! let config = ClientConfig::from_env()?;
//! let api = ApiClient::new(&config)?;
//! let mut store = SessionStore::open(config.session_file())?;
//! zenith_storefront::pages::auth::restore_session(&api, &store);
//!
//! let page = zenith_storefront::pages::cart::load_cart(&api).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod pages;
pub mod session;
