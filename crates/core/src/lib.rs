//! Zenith Core - Shared types and purchase rules.
//!
//! This crate provides the common types and decision logic used across the
//! Zenith storefront components:
//! - `storefront` - API client, session store, and page flows
//! - `cli` - The `zenith` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no filesystem access. Every operation here is total and deterministic over
//! already-fetched data.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, account tiers, validated contact fields, prices
//! - [`eligibility`] - The buyer-restriction purchase rule
//! - [`cart`] - Cart normalization, totals, and quantity reconciliation
//! - [`compare`] - The bounded product comparison selection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod compare;
pub mod eligibility;
pub mod types;

pub use types::*;
