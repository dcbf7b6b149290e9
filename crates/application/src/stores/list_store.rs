//! Observable list state.
//!
//! A plain state container with explicit getters and mutators plus a
//! watch-channel subscription, decoupled from any UI binding framework.
//! Views subscribe once and re-render from snapshots.

use tokio::sync::watch;

use stockpile_domain::Pagination;

/// Immutable snapshot of a list screen's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot<T> {
    /// Items on the current page.
    pub results: Vec<T>,
    /// Total matching items across all pages.
    pub count: usize,
    /// Current page selection.
    pub pagination: Pagination,
    /// True while a load is in flight.
    pub loading: bool,
    /// Last load failure, cleared by the next successful load.
    pub error: Option<String>,
}

impl<T> Default for ListSnapshot<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            pagination: Pagination::default(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListSnapshot<T> {
    /// Number of pages needed for the current total.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.pagination.page_size == 0 {
            return 0;
        }
        self.count.div_ceil(self.pagination.page_size as usize)
    }

    /// Returns true when nothing matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Observable container driving one list screen.
#[derive(Debug)]
pub struct ListStore<T> {
    state: watch::Sender<ListSnapshot<T>>,
}

impl<T: Clone> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ListStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(ListSnapshot::default());
        Self { state }
    }

    /// Subscribes to state changes. The receiver immediately holds the
    /// current snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot<T>> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot<T> {
        self.state.borrow().clone()
    }

    /// Marks a load as started and clears any previous error.
    pub fn begin_load(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    /// Publishes a successful load.
    pub fn set_results(&self, results: Vec<T>, count: usize) {
        self.state.send_modify(|s| {
            s.results = results;
            s.count = count;
            s.loading = false;
            s.error = None;
        });
    }

    /// Publishes a failed load.
    pub fn set_error(&self, error: impl Into<String>) {
        let error = error.into();
        self.state.send_modify(|s| {
            s.loading = false;
            s.error = Some(error);
        });
    }

    /// Merges a partial pagination change, keeping the other field.
    pub fn merge_pagination(&self, page: Option<u32>, page_size: Option<u32>) {
        self.state.send_modify(|s| {
            if let Some(page) = page {
                s.pagination.page = page;
            }
            if let Some(page_size) = page_size {
                s.pagination.page_size = page_size;
            }
        });
    }

    /// Resets the store to its initial state.
    pub fn reset(&self) {
        self.state.send_modify(|s| *s = ListSnapshot::default());
    }
}
