//! Command implementations.

use zenith_storefront::api::ApiClient;
use zenith_storefront::session::SessionStore;

pub mod admin;
pub mod auth;
pub mod careers;
pub mod cart;
pub mod catalog;
pub mod contact;
pub mod orders;
pub mod profile;

/// Shared command context: the API client plus the persisted session.
pub struct Context {
    pub api: ApiClient,
    pub store: SessionStore,
}
