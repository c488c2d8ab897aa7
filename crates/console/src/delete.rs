//! Optimistic delete with exact-snapshot rollback.
//!
//! Deleting is two-phase: snapshot the row set and remove the row locally,
//! then issue the remote delete. Success makes the removal permanent; any
//! failure restores the snapshot unchanged. The in-flight marker is cleared
//! on every exit path, so no row is left stuck in the deleting state.

use devportal_catalog::ProductRow;
use devportal_store::{ProductStore, StoreError};

use crate::state::{DashboardState, Transition};

/// A delete applied locally but not yet confirmed remotely.
///
/// The caller confirms the action with the user before calling
/// [`PendingDelete::begin`]; a constructed value must be resolved with
/// [`PendingDelete::commit`] or [`PendingDelete::rollback`].
#[derive(Debug)]
pub struct PendingDelete {
    id: String,
    snapshot: Vec<ProductRow>,
}

impl PendingDelete {
    /// Snapshot the current row set and apply the speculative removal.
    ///
    /// Returns `None` when another delete is already in flight or the row is
    /// not present; in both cases the state is untouched.
    pub fn begin(state: &mut DashboardState, id: &str) -> Option<Self> {
        if state.delete_in_flight() {
            tracing::warn!("delete already in flight, ignoring request for {}", id);
            return None;
        }
        if !state.rows().iter().any(|row| row.id == id) {
            return None;
        }
        let snapshot = state.rows().to_vec();
        state.apply(Transition::BeginDelete(id.to_string()));
        Some(Self {
            id: id.to_string(),
            snapshot,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The remote delete succeeded: the speculative removal stays.
    pub fn commit(self, state: &mut DashboardState) {
        state.apply(Transition::CommitDelete);
    }

    /// The remote delete failed: restore the exact pre-delete snapshot.
    pub fn rollback(self, state: &mut DashboardState) {
        state.apply(Transition::RollbackDelete(self.snapshot));
    }
}

/// Outcome of a delete attempt, as surfaced to the view.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// Removal confirmed remotely.
    Deleted,
    /// Removal rolled back; the error is shown as a blocking notice.
    Failed(StoreError),
    /// Another delete was in flight or the row was gone; nothing changed.
    NotStarted,
}

/// Run the full delete flow against owned state.
pub async fn delete_product<S>(store: &S, state: &mut DashboardState, id: &str) -> DeleteOutcome
where
    S: ProductStore + ?Sized,
{
    let Some(pending) = PendingDelete::begin(state, id) else {
        return DeleteOutcome::NotStarted;
    };
    match store.delete_product(id).await {
        Ok(()) => {
            tracing::info!("deleted product {}", id);
            pending.commit(state);
            DeleteOutcome::Deleted
        }
        Err(err) => {
            tracing::error!("delete failed for product {}: {}", id, err);
            pending.rollback(state);
            DeleteOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use devportal_store::StoreResult;

    use super::*;

    struct FakeStore {
        rows: RefCell<Vec<ProductRow>>,
        fail_delete: bool,
    }

    #[async_trait(?Send)]
    impl ProductStore for FakeStore {
        async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
            Ok(self.rows.borrow().clone())
        }

        async fn delete_product(&self, id: &str) -> StoreResult<()> {
            if self.fail_delete {
                return Err(StoreError::Api(403, "row policy".to_string()));
            }
            self.rows.borrow_mut().retain(|row| row.id != id);
            Ok(())
        }
    }

    fn row(id: &str, name: &str) -> ProductRow {
        ProductRow {
            id: id.to_string(),
            name: Some(name.to_string()),
            ..ProductRow::default()
        }
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new();
        state.apply(Transition::SetRows(vec![
            row("1", "Weather API"),
            row("2", "Maps API"),
        ]));
        state
    }

    #[tokio::test]
    async fn successful_delete_removes_only_that_row() {
        let store = FakeStore {
            rows: RefCell::new(vec![row("1", "Weather API"), row("2", "Maps API")]),
            fail_delete: false,
        };
        let mut state = loaded_state();

        let outcome = delete_product(&store, &mut state, "1").await;
        assert!(matches!(outcome, DeleteOutcome::Deleted));
        let ids: Vec<_> = state.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
        assert!(!state.delete_in_flight());
    }

    #[tokio::test]
    async fn failed_delete_restores_snapshot_at_original_position() {
        let store = FakeStore {
            rows: RefCell::new(vec![row("1", "Weather API"), row("2", "Maps API")]),
            fail_delete: true,
        };
        let mut state = loaded_state();

        let outcome = delete_product(&store, &mut state, "2").await;
        assert!(matches!(outcome, DeleteOutcome::Failed(StoreError::Api(403, _))));
        let ids: Vec<_> = state.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(!state.delete_in_flight());
    }

    #[tokio::test]
    async fn delete_of_absent_row_is_a_no_op() {
        let store = FakeStore {
            rows: RefCell::new(Vec::new()),
            fail_delete: false,
        };
        let mut state = loaded_state();
        let outcome = delete_product(&store, &mut state, "missing").await;
        assert!(matches!(outcome, DeleteOutcome::NotStarted));
        assert_eq!(state.rows().len(), 2);
    }

    #[test]
    fn second_begin_is_refused_while_one_is_in_flight() {
        let mut state = loaded_state();
        let first = PendingDelete::begin(&mut state, "1").expect("first delete should start");
        assert!(state.is_deleting("1"));

        assert!(PendingDelete::begin(&mut state, "2").is_none());
        // The refused attempt must not have touched the set or the marker.
        assert!(state.is_deleting("1"));
        assert_eq!(state.rows().len(), 1);

        first.rollback(&mut state);
        assert!(!state.delete_in_flight());
        assert_eq!(state.rows().len(), 2);
    }

    #[test]
    fn indicator_clears_on_both_exit_paths() {
        let mut state = loaded_state();
        let pending = PendingDelete::begin(&mut state, "1").expect("delete should start");
        pending.commit(&mut state);
        assert!(!state.delete_in_flight());

        let pending = PendingDelete::begin(&mut state, "2").expect("delete should start");
        pending.rollback(&mut state);
        assert!(!state.delete_in_flight());
    }
}
