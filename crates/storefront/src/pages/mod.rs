//! Headless page flows.
//!
//! Each module here is the controller for one page of the storefront: it
//! orchestrates API calls, applies the purchase/cart rules, and returns a
//! plain view model for whatever front end is driving it (the bundled CLI,
//! or anything else). No markup, no rendering.
//!
//! Error policy: flows return [`crate::error::ApiError`] and the caller shows
//! `error.to_string()` and restores its controls. The one exception is the
//! nav badge, which is best-effort and degrades to zero.

pub mod admin;
pub mod auth;
pub mod careers;
pub mod cart;
pub mod checkout;
pub mod compare;
pub mod contact;
pub mod nav;
pub mod orders;
pub mod products;
pub mod profile;

/// Truncate display text to `max` characters, appending an ellipsis.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

/// Human-readable order/post date: `March 5, 2026`.
#[must_use]
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
