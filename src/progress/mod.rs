//! Progress system: XP, levels, totals and achievements
//!
//! The level is always derived from cumulative XP through [`LEVELS`]. XP only
//! grows, so the level never goes down.

mod achievements;
mod levels;

pub use achievements::{ACHIEVEMENTS, Achievement, AchievementId, AchievementProgress};
pub use levels::{LEVELS, Level, LevelName, LevelProgress, XpRewards};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::notify::ToastKind;
use crate::services::Services;
use crate::storage::{PROGRESS_KEY, load_record, save_json};

const WORD_REASON: &str = "كلمة جديدة / Nytt ord";
const GAME_REASON: &str = "لعبة مكتملة / Spel klart";

/// Learner progress as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub xp: u32,
    pub level: u32,
    pub total_words: u32,
    pub games_completed: u32,
    pub achievements: BTreeSet<String>,
    pub last_active: DateTime<Utc>,
}

impl UserProgress {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            xp: 0,
            level: 1,
            total_words: 0,
            games_completed: 0,
            achievements: BTreeSet::new(),
            last_active: now,
        }
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

pub struct ProgressManager {
    services: Services,
    rewards: XpRewards,
    progress: UserProgress,
}

impl ProgressManager {
    pub fn new(services: Services) -> Self {
        Self::with_rewards(services, XpRewards::default())
    }

    pub fn with_rewards(services: Services, rewards: XpRewards) -> Self {
        let progress = match load_record::<UserProgress>(services.store.as_ref(), PROGRESS_KEY) {
            Ok(Some(mut saved)) => {
                let derived = Level::for_xp(saved.xp).level;
                if saved.level != derived {
                    debug!(
                        "Stored level {} does not match {} XP, using level {}",
                        saved.level, saved.xp, derived
                    );
                    saved.level = derived;
                }
                saved
            }
            Ok(None) => UserProgress::new(services.clock.now()),
            Err(e) => {
                debug!("Could not load progress, starting fresh: {}", e);
                UserProgress::new(services.clock.now())
            }
        };

        Self {
            services,
            rewards,
            progress,
        }
    }

    /// Award XP and announce a level-up at most once per call
    pub fn add_xp(&mut self, amount: u32, reason: Option<&str>) {
        let old_level = self.progress.level;
        self.progress.xp = self.progress.xp.saturating_add(amount);
        self.progress.level = Level::for_xp(self.progress.xp).level;

        if self.progress.level > old_level {
            self.on_level_up(old_level, self.progress.level);
        }

        self.save();

        if let Some(reason) = reason {
            self.services
                .notifier
                .show_toast(&format!("+{} XP: {}", amount, reason), ToastKind::Success);
        }
    }

    pub fn add_word(&mut self) {
        self.progress.total_words = self.progress.total_words.saturating_add(1);
        self.add_xp(self.rewards.word, Some(WORD_REASON));
    }

    pub fn complete_game(&mut self, game_id: &str) {
        debug!("Game '{}' completed", game_id);
        self.progress.games_completed = self.progress.games_completed.saturating_add(1);
        self.add_xp(self.rewards.game, Some(GAME_REASON));
    }

    /// Snapshot of the current record
    pub fn get_progress(&self) -> UserProgress {
        self.progress.clone()
    }

    pub fn get_level_progress(&self) -> LevelProgress {
        LevelProgress::new(self.progress.xp, self.progress.level)
    }

    /// Display name of the current level; levels past the table use the last name
    pub fn get_level_name(&self) -> LevelName {
        Level::clamped(self.progress.level).name
    }

    /// Unlock a catalog achievement by its string ID.
    ///
    /// Returns true only the first time a known ID is unlocked.
    pub fn unlock_achievement(&mut self, id: &str) -> bool {
        let Some(achievement) = Achievement::find(id) else {
            debug!("Ignoring unknown achievement '{}'", id);
            return false;
        };
        if !self.progress.achievements.insert(id.to_string()) {
            return false;
        }

        info!("Achievement unlocked: {}", id);
        self.save();
        self.services
            .notifier
            .show_toast(&achievement.announcement(), ToastKind::Success);
        true
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.progress.achievements.contains(id)
    }

    /// Unlocked achievements in catalog order
    pub fn unlocked_achievements(&self) -> Vec<&'static Achievement> {
        ACHIEVEMENTS
            .iter()
            .filter(|a| self.has_achievement(a.id.as_str()))
            .collect()
    }

    pub fn locked_achievements(&self) -> Vec<&'static Achievement> {
        ACHIEVEMENTS
            .iter()
            .filter(|a| !self.has_achievement(a.id.as_str()))
            .collect()
    }

    pub fn achievement_progress(&self) -> AchievementProgress {
        AchievementProgress::new(self.unlocked_achievements().len())
    }

    fn on_level_up(&self, old_level: u32, new_level: u32) {
        let name = Level::clamped(new_level).name;
        info!("Level up: {} -> {} ({})", old_level, new_level, name.sv);

        self.services.notifier.trigger_confetti();
        self.services.notifier.show_toast(
            &format!("🎉 Level {}! {} / {}", new_level, name.ar, name.sv),
            ToastKind::Success,
        );
    }

    fn save(&mut self) {
        self.progress.last_active = self.services.clock.now();
        if let Err(e) = save_json(self.services.store.as_ref(), PROGRESS_KEY, &self.progress) {
            warn!("Failed to save progress: {}", e);
        }
    }
}
