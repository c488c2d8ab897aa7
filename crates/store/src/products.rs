//! Typed surface over the product listings table.

use async_trait::async_trait;
use devportal_catalog::ProductRow;

use crate::client::{Client, Order};
use crate::error::StoreResult;

/// Remote collection holding product rows.
pub const PRODUCTS_TABLE: &str = "api_products";

/// Fixed column projection consumed by the console.
pub const PRODUCT_COLUMNS: &str =
    "id,name,category,status,visibility,thumbnail_url,service_endpoint_url,created_at";

/// Read/delete access to product rows.
///
/// The console depends on this trait rather than on [`Client`] directly so
/// its state logic can be exercised against an in-memory store in tests.
#[async_trait(?Send)]
pub trait ProductStore {
    /// All product rows, newest first (rows without a timestamp last).
    async fn list_products(&self) -> StoreResult<Vec<ProductRow>>;

    /// Delete the row with the given identifier.
    async fn delete_product(&self, id: &str) -> StoreResult<()>;
}

#[async_trait(?Send)]
impl ProductStore for Client {
    async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
        self.from(PRODUCTS_TABLE)
            .select(PRODUCT_COLUMNS)
            .order("created_at", Order::Descending)
            .fetch()
            .await
    }

    async fn delete_product(&self, id: &str) -> StoreResult<()> {
        self.from(PRODUCTS_TABLE)
            .delete()
            .eq("id", id)
            .execute()
            .await
    }
}
