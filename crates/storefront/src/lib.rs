//! Viriot Storefront library.
//!
//! This crate provides the client-side storefront logic as a library,
//! allowing it to be tested and reused by any front end.
//!
//! # Modules
//!
//! - [`cart`] - The shopping cart store and its snapshot format
//! - [`storage`] - Durable key-value backends the cart persists into
//! - [`catalog`] - Products, reviews, menu filtering and review validation
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Crate-level error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

pub use cart::{CartLineItem, CartStore, CartView};
pub use catalog::{Product, Review};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
