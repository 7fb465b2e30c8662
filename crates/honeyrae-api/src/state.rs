//! Shared application state for the service ticket API.
//!
//! [`AppState`] owns the one [`EntityStore`] for the process behind a
//! single [`RwLock`]. Mutations hold the write guard for their whole
//! duration, so two concurrent creates can never compute the same next
//! ticket id. Reads share the read guard.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use honeyrae_core::{Clock, EntityStore, QueryEngine, ReportWindows, SystemClock};
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The dispatch state, guarded by one lock for all collections.
    pub store: Arc<RwLock<EntityStore>>,
    /// Source of evaluation time for trailing-window reports.
    pub clock: Arc<dyn Clock>,
    /// Report window lengths.
    pub windows: ReportWindows,
}

impl AppState {
    /// Wrap `store` with the system clock and default report windows.
    pub fn new(store: EntityStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Wrap `store` with an explicit clock.
    pub fn with_clock(store: EntityStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            clock,
            windows: ReportWindows::default(),
        }
    }

    /// Replace the report windows.
    #[must_use]
    pub fn with_windows(mut self, windows: ReportWindows) -> Self {
        self.windows = windows;
        self
    }

    /// Current evaluation time.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// A query engine over `store` using this state's report windows.
    pub const fn queries<'a>(&self, store: &'a EntityStore) -> QueryEngine<'a> {
        QueryEngine::with_windows(store, self.windows)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EntityStore::new())
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppState")
            .field("windows", &self.windows)
            .finish_non_exhaustive()
    }
}
