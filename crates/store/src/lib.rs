//! `devportal-store`
//!
//! **Responsibility:** Remote access to the hosted product store.
//!
//! This crate provides:
//! - Best-effort token retrieval from the external identity provider
//! - A REST client with fluent query/delete builders
//! - A single error type covering both transport failures and store-reported
//!   errors, so callers branch on one `Result`
//! - The typed [`ProductStore`] surface consumed by the console
pub mod client;
pub mod error;
pub mod products;
pub mod token;

pub use client::{Client, Order, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use products::{PRODUCT_COLUMNS, PRODUCTS_TABLE, ProductStore};
pub use token::{IdentityClient, STORE_TOKEN_TEMPLATE, TokenProvider};
