//! Mistakes review: words the learner answered incorrectly
//!
//! Entries are keyed by word and kept in touch order (oldest first). Adding a
//! word that is already tracked bumps its attempt count and moves it to the
//! most recent end. The list is capped; the least recently touched entries
//! are dropped first.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::services::Services;
use crate::storage::{MISTAKES_KEY, load_json, save_json};

/// Maximum number of tracked words
pub const MAX_MISTAKES: usize = 50;

/// Entries returned by [`MistakesManager::get_top_mistakes`] by default
pub const DEFAULT_TOP_MISTAKES: usize = 10;

/// A tracked mistake as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MistakeEntry {
    pub word: String,
    pub translation: String,
    pub game: String,
    /// Unix milliseconds of the last time this word was answered wrong
    pub timestamp: i64,
    pub attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

/// A mistake reported by a game, before attempts and timestamp are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMistake {
    pub word: String,
    pub translation: String,
    pub game: String,
    pub correct_answer: Option<String>,
}

impl NewMistake {
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        game: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            game: game.into(),
            correct_answer: None,
        }
    }

    pub fn with_correct_answer(mut self, answer: impl Into<String>) -> Self {
        self.correct_answer = Some(answer.into());
        self
    }
}

pub struct MistakesManager {
    services: Services,
    max_entries: usize,
    mistakes: Vec<MistakeEntry>,
}

impl MistakesManager {
    pub fn new(services: Services) -> Self {
        Self::with_capacity(services, MAX_MISTAKES)
    }

    /// Manager keeping at most `max_entries` words (at least one)
    pub fn with_capacity(services: Services, max_entries: usize) -> Self {
        let mistakes = match load_json::<Vec<MistakeEntry>>(services.store.as_ref(), MISTAKES_KEY) {
            Ok(Some(saved)) => {
                debug!("Loaded {} mistakes", saved.len());
                saved
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!("Could not load mistakes, starting empty: {}", e);
                Vec::new()
            }
        };

        let mut manager = Self {
            services,
            max_entries: max_entries.max(1),
            mistakes,
        };
        manager.enforce_cap();
        manager
    }

    /// Record a wrong answer for `entry.word`
    pub fn add_mistake(&mut self, entry: NewMistake) {
        let now = self.services.clock.now_ms();

        match self.mistakes.iter().position(|m| m.word == entry.word) {
            Some(index) => {
                let mut existing = self.mistakes.remove(index);
                existing.attempts = existing.attempts.saturating_add(1);
                existing.timestamp = now;
                debug!("Mistake '{}' repeated ({} attempts)", existing.word, existing.attempts);
                self.mistakes.push(existing);
            }
            None => {
                debug!("New mistake '{}' in {}", entry.word, entry.game);
                self.mistakes.push(MistakeEntry {
                    word: entry.word,
                    translation: entry.translation,
                    game: entry.game,
                    timestamp: now,
                    attempts: 1,
                    correct_answer: entry.correct_answer,
                });
            }
        }

        self.save();
    }

    /// Stop tracking `word`
    pub fn mark_as_learned(&mut self, word: &str) {
        self.mistakes.retain(|m| m.word != word);
        self.save();
    }

    /// All entries, most attempts first; equal counts keep touch order
    pub fn get_mistakes(&self) -> Vec<MistakeEntry> {
        let mut sorted = self.mistakes.clone();
        sorted.sort_by(|a, b| b.attempts.cmp(&a.attempts));
        sorted
    }

    pub fn get_top_mistakes(&self, count: usize) -> Vec<MistakeEntry> {
        let mut top = self.get_mistakes();
        top.truncate(count);
        top
    }

    pub fn get_mistake_count(&self) -> usize {
        self.mistakes.len()
    }

    /// Words missed at least twice, in touch order
    pub fn get_frequent_mistakes(&self) -> Vec<MistakeEntry> {
        self.mistakes
            .iter()
            .filter(|m| m.attempts >= 2)
            .cloned()
            .collect()
    }

    pub fn clear_all(&mut self) {
        self.mistakes.clear();
        self.save();
    }

    /// Drop the least recently touched entries beyond `max_entries`
    fn enforce_cap(&mut self) {
        if self.mistakes.len() > self.max_entries {
            let excess = self.mistakes.len() - self.max_entries;
            self.mistakes.drain(..excess);
            debug!("Evicted {} oldest mistakes", excess);
        }
    }

    fn save(&mut self) {
        self.enforce_cap();

        if let Err(e) = save_json(self.services.store.as_ref(), MISTAKES_KEY, &self.mistakes) {
            warn!("Failed to save mistakes: {}", e);
        }
    }
}
