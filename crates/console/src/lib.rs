//! `devportal-console`
//!
//! **Responsibility:** The API-product listings dashboard page.
//!
//! Page state lives in an explicit [`state::DashboardState`] mutated only
//! through named transitions. The listing loader and the optimistic delete
//! flow are plain async functions over a [`devportal_store::ProductStore`],
//! so the whole page logic is testable without a browser. The Leptos view
//! (WASM builds only) is a thin shell over that controller.

pub mod delete;
pub mod loader;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use delete::{DeleteOutcome, PendingDelete, delete_product};
pub use loader::{CancelToken, fetch_rows, load_dashboard};
pub use state::{DashboardState, Transition};
