//! Listing loader with cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use devportal_catalog::ProductRow;
use devportal_store::ProductStore;

use crate::state::{DashboardState, Transition};

/// Cooperative cancellation flag for an in-flight load.
///
/// Cancelling does not abort the network call; it prevents the result from
/// being applied once the call settles. The view cancels on teardown.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fetch all product rows.
///
/// Any failure is logged and collapses to the empty set: the page shows the
/// ordinary empty state rather than a distinct error. Nothing is retried.
pub async fn fetch_rows<S>(store: &S) -> Vec<ProductRow>
where
    S: ProductStore + ?Sized,
{
    match store.list_products().await {
        Ok(rows) => {
            tracing::info!("loaded {} product rows", rows.len());
            rows
        }
        Err(err) => {
            tracing::error!("product list fetch failed: {}", err);
            Vec::new()
        }
    }
}

/// Fetch and apply the row set, unless the token was cancelled while the
/// fetch was in flight.
pub async fn load_dashboard<S>(store: &S, token: &CancelToken, state: &mut DashboardState)
where
    S: ProductStore + ?Sized,
{
    let rows = fetch_rows(store).await;
    if token.is_cancelled() {
        tracing::debug!("discarding fetch result after teardown");
        return;
    }
    state.apply(Transition::SetRows(rows));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use devportal_store::{StoreError, StoreResult};

    use super::*;

    struct FakeStore {
        rows: RefCell<Vec<ProductRow>>,
        fail_list: bool,
    }

    impl FakeStore {
        fn with_rows(rows: Vec<ProductRow>) -> Self {
            Self {
                rows: RefCell::new(rows),
                fail_list: false,
            }
        }

        fn failing() -> Self {
            Self {
                rows: RefCell::new(Vec::new()),
                fail_list: true,
            }
        }
    }

    #[async_trait(?Send)]
    impl ProductStore for FakeStore {
        async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
            if self.fail_list {
                return Err(StoreError::Api(500, "boom".to_string()));
            }
            Ok(self.rows.borrow().clone())
        }

        async fn delete_product(&self, id: &str) -> StoreResult<()> {
            self.rows.borrow_mut().retain(|row| row.id != id);
            Ok(())
        }
    }

    fn row(id: &str) -> ProductRow {
        ProductRow {
            id: id.to_string(),
            ..ProductRow::default()
        }
    }

    #[tokio::test]
    async fn load_applies_rows_and_clears_loading() {
        let store = FakeStore::with_rows(vec![row("1"), row("2")]);
        let mut state = DashboardState::new();
        load_dashboard(&store, &CancelToken::new(), &mut state).await;
        assert!(!state.is_loading());
        assert_eq!(state.rows().len(), 2);
    }

    #[tokio::test]
    async fn failed_fetch_yields_empty_set_with_loading_cleared() {
        let store = FakeStore::failing();
        let mut state = DashboardState::new();
        assert!(state.is_loading());
        load_dashboard(&store, &CancelToken::new(), &mut state).await;
        assert!(!state.is_loading());
        assert!(state.rows().is_empty());
    }

    #[tokio::test]
    async fn cancelled_token_prevents_state_application() {
        let store = FakeStore::with_rows(vec![row("1")]);
        let mut state = DashboardState::new();
        let token = CancelToken::new();
        token.cancel();
        load_dashboard(&store, &token, &mut state).await;
        // Untouched: still loading, still empty.
        assert!(state.is_loading());
        assert!(state.rows().is_empty());
    }
}
