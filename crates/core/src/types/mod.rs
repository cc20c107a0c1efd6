//! Core types for the Zenith storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod account;
pub mod email;
pub mod id;
pub mod phone;
pub mod price;

pub use account::{AccountType, BuyerRequirement, UserRole};
pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use price::format_usd;
