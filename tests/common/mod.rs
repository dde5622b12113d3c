//! Shared test utilities for storage-backed integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use snabbalexin::clock::FixedClock;
use snabbalexin::config::StorageBackend;
use snabbalexin::notify::RecordingNotifier;
use snabbalexin::storage::FileStore;
use snabbalexin::{Config, Services};

/// Config whose state lives under `dir`
pub fn config_in(dir: &Path, backend: StorageBackend) -> Config {
    let mut config = Config::default();
    config.storage.backend = backend;
    config.storage.data_dir = Some(dir.to_path_buf());
    config
}

/// Clock parked at noon UTC on 2024-03-10
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::at_day(2024, 3, 10).expect("valid date"))
}

/// Services over a file store in `dir` with a controllable clock
pub fn file_services(
    dir: &TempDir,
    clock: &Arc<FixedClock>,
    notifier: &Arc<RecordingNotifier>,
) -> Services {
    let store = FileStore::open(dir.path().join("state")).expect("Failed to open file store");
    Services::new(Arc::new(store))
        .with_clock(clock.clone())
        .with_notifier(notifier.clone())
}
