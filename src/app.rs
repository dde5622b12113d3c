//! Application wiring: one instance of each manager over shared services

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::clock::SystemClock;
use crate::config::{Config, StorageBackend};
use crate::daily::DailyChallengeManager;
use crate::mistakes::{MistakesManager, NewMistake};
use crate::notify::{Notifier, TracingNotifier};
use crate::progress::ProgressManager;
use crate::services::Services;
use crate::storage::{FileStore, KeyValueStore, SqliteStore};

/// File name of the SQLite backend inside the data directory
pub const SQLITE_FILE: &str = "state.db";

/// Directory of the file backend inside the data directory
pub const STATE_DIR: &str = "state";

/// The learner-state managers of one user
pub struct App {
    daily: DailyChallengeManager,
    mistakes: MistakesManager,
    progress: ProgressManager,
}

impl App {
    /// Build all managers over `services` using the limits from `config`
    pub fn new(services: Services, config: &Config) -> Self {
        Self {
            daily: DailyChallengeManager::with_target(services.clone(), config.daily.words_target),
            mistakes: MistakesManager::with_capacity(services.clone(), config.mistakes.max_entries),
            progress: ProgressManager::with_rewards(services, config.rewards.xp_rewards()),
        }
    }

    /// Open the configured storage backend with the system clock and
    /// notifications going to the log
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_with_notifier(config, Arc::new(TracingNotifier))
    }

    pub fn open_with_notifier(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let store = open_store(config)?;
        let services = Services::new(store)
            .with_clock(Arc::new(SystemClock))
            .with_notifier(notifier);
        Ok(Self::new(services, config))
    }

    pub fn daily(&self) -> &DailyChallengeManager {
        &self.daily
    }

    pub fn daily_mut(&mut self) -> &mut DailyChallengeManager {
        &mut self.daily
    }

    pub fn mistakes(&self) -> &MistakesManager {
        &self.mistakes
    }

    pub fn mistakes_mut(&mut self) -> &mut MistakesManager {
        &mut self.mistakes
    }

    pub fn progress(&self) -> &ProgressManager {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressManager {
        &mut self.progress
    }

    /// A new word was learned: counts towards today's goal and awards XP
    pub fn record_word_learned(&mut self) {
        self.daily.add_word();
        self.progress.add_word();
    }

    /// A game was finished
    pub fn record_game_completed(&mut self, game_id: &str) {
        self.daily.add_game_played(game_id);
        self.progress.complete_game(game_id);
    }

    /// A word was answered incorrectly
    pub fn record_mistake(&mut self, mistake: NewMistake) {
        self.mistakes.add_mistake(mistake);
    }
}

/// Open the backend selected by `config.storage`
pub fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let data_dir = config.data_dir();
    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::Files => {
            let dir = data_dir.join(STATE_DIR);
            let store = FileStore::open(&dir)
                .with_context(|| format!("Failed to open state directory: {}", dir.display()))?;
            Arc::new(store)
        }
        StorageBackend::Sqlite => {
            let path = data_dir.join(SQLITE_FILE);
            let store = SqliteStore::open(&path)
                .with_context(|| format!("Failed to open state database: {}", path.display()))?;
            Arc::new(store)
        }
    };
    tracing::debug!(
        "Opened {:?} storage in {}",
        config.storage.backend,
        data_dir.display()
    );
    Ok(store)
}
