//! Dashboard page state.
//!
//! The row set, query text, and loading/deleting flags live in one struct
//! that changes only through [`Transition`]s. Each transition swaps whole
//! values (full row-set replacement, full snapshot restore), so readers
//! never observe a partially updated set.

use devportal_catalog::{ProductRow, filter_rows};

/// State owned by the products page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    rows: Vec<ProductRow>,
    query: String,
    loading: bool,
    deleting: Option<String>,
}

/// Named state transitions.
#[derive(Debug, Clone)]
pub enum Transition {
    /// Replace the row set with a fetch result; ends the loading state.
    SetRows(Vec<ProductRow>),
    /// Replace the search query text.
    SetQuery(String),
    /// Record a delete in flight and speculatively remove the row.
    BeginDelete(String),
    /// Keep the speculative removal; clear the in-flight marker.
    CommitDelete,
    /// Restore the exact pre-delete snapshot; clear the in-flight marker.
    RollbackDelete(Vec<ProductRow>),
}

impl DashboardState {
    /// Fresh page state: no rows yet, loading until the first fetch settles.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            query: String::new(),
            loading: true,
            deleting: None,
        }
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::SetRows(rows) => {
                self.rows = rows;
                self.loading = false;
            }
            Transition::SetQuery(query) => self.query = query,
            Transition::BeginDelete(id) => {
                self.rows.retain(|row| row.id != id);
                self.deleting = Some(id);
            }
            Transition::CommitDelete => self.deleting = None,
            Transition::RollbackDelete(snapshot) => {
                self.rows = snapshot;
                self.deleting = None;
            }
        }
    }

    /// Rows matching the current query, recomputed on every call so the
    /// result can never go stale relative to rows or query text.
    pub fn visible_rows(&self) -> Vec<&ProductRow> {
        filter_rows(&self.rows, &self.query)
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Identifier of the row whose delete is in flight, if any.
    pub fn deleting(&self) -> Option<&str> {
        self.deleting.as_deref()
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.as_deref() == Some(id)
    }

    pub fn delete_in_flight(&self) -> bool {
        self.deleting.is_some()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
