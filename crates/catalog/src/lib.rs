//! `devportal-catalog`
//!
//! **Responsibility:** Pure domain model for API-product listings.
//!
//! This crate contains the product row snapshot, the status and visibility
//! presentation mappings, and the client-side search filter, implemented as
//! deterministic logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod product;

pub use filter::filter_rows;
pub use product::{
    PLACEHOLDER, ProductRow, ProductStatus, Visibility, endpoint_host, status_label,
    visibility_label,
};
