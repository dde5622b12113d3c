//! Collaborators shared by all managers

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::notify::{NoopNotifier, Notifier};
use crate::storage::{KeyValueStore, MemoryStore};

/// Storage, clock and notifier handed to each manager at construction
#[derive(Clone)]
pub struct Services {
    pub store: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
    pub notifier: Arc<dyn Notifier>,
}

impl Services {
    /// System clock and no UI hooks
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Fresh in-memory store with system clock and no UI hooks
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
