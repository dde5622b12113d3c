//! Shared fixtures for unit tests

use std::sync::Arc;

use crate::clock::FixedClock;
use crate::notify::RecordingNotifier;
use crate::services::Services;
use crate::storage::MemoryStore;

pub(crate) struct TestEnv {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestEnv {
    /// In-memory environment at 2024-03-10 12:00 UTC
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            clock: Arc::new(FixedClock::at_day(2024, 3, 10).unwrap()),
            notifier: Arc::new(RecordingNotifier::new()),
        }
    }

    pub fn services(&self) -> Services {
        Services::new(self.store.clone())
            .with_clock(self.clock.clone())
            .with_notifier(self.notifier.clone())
    }
}
