//! Configuration loading and management

mod io;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::daily::DEFAULT_WORDS_TARGET;
use crate::mistakes::MAX_MISTAKES;
use crate::progress::XpRewards;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where learner state is kept
    #[serde(default)]
    pub storage: StorageSettings,

    /// Daily challenge settings
    #[serde(default)]
    pub daily: DailySettings,

    /// Mistakes review settings
    #[serde(default)]
    pub mistakes: MistakeSettings,

    /// XP awarded per learner event
    #[serde(default)]
    pub rewards: RewardSettings,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per record
    #[default]
    Files,
    /// Single SQLite database
    Sqlite,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for state files; defaults to ~/.snabbalexin/
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySettings {
    /// New words per day to complete the challenge
    #[serde(default = "default_words_target")]
    pub words_target: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MistakeSettings {
    /// Maximum tracked words; least recently missed are dropped first
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardSettings {
    #[serde(default = "default_word_xp")]
    pub word_xp: u32,

    #[serde(default = "default_game_xp")]
    pub game_xp: u32,
}

fn default_words_target() -> u32 {
    DEFAULT_WORDS_TARGET
}

fn default_max_entries() -> usize {
    MAX_MISTAKES
}

fn default_word_xp() -> u32 {
    XpRewards::WORD
}

fn default_game_xp() -> u32 {
    XpRewards::GAME
}

impl Default for DailySettings {
    fn default() -> Self {
        Self {
            words_target: default_words_target(),
        }
    }
}

impl Default for MistakeSettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            word_xp: default_word_xp(),
            game_xp: default_game_xp(),
        }
    }
}

impl RewardSettings {
    pub fn xp_rewards(&self) -> XpRewards {
        XpRewards {
            word: self.word_xp,
            game: self.game_xp,
        }
    }
}

impl Config {
    /// Clamp values that would make a manager meaningless.
    ///
    /// Returns a warning per adjusted field.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.daily.words_target == 0 {
            warnings.push("daily.words_target must be at least 1, using 1".to_string());
            self.daily.words_target = 1;
        }
        if self.mistakes.max_entries == 0 {
            warnings.push("mistakes.max_entries must be at least 1, using 1".to_string());
            self.mistakes.max_entries = 1;
        }
        warnings
    }

    /// Directory holding learner state
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }
}
