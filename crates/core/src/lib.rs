//! Viriot Core - Shared types library.
//!
//! This crate provides common types used across all Viriot components:
//! - `storefront` - Cart store, catalog and menu logic
//! - `cli` - Command-line front end for the cart and menu
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and review ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
