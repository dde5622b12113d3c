//! Daily challenge: a single day's word goal plus the cross-day streak
//!
//! Today's challenge lives under [`DAILY_KEY`], the streak under
//! [`STREAK_KEY`]. A challenge is created whenever the stored one is missing,
//! unreadable or dated another day. The streak only moves when a challenge is
//! completed.

mod streak;

pub use streak::StreakRecord;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::format_day;
use crate::notify::ToastKind;
use crate::services::Services;
use crate::storage::{DAILY_KEY, LoadError, STREAK_KEY, load_record, save_json};

/// Words to learn per day unless configured otherwise
pub const DEFAULT_WORDS_TARGET: u32 = 5;

const COMPLETION_TOAST: &str = "🎉 أكملت تحدي اليوم! / Dagens utmaning klar!";

/// One calendar day's challenge as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    pub date: String,
    pub words_target: u32,
    pub words_completed: u32,
    /// Game ids in the order first played
    #[serde(default)]
    pub games_played: Vec<String>,
    pub completed: bool,
    #[serde(default)]
    pub streak_days: u32,
}

/// Progress view for widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    pub completed: u32,
    pub target: u32,
    /// 0-100, rounded
    pub percentage: u32,
    pub is_complete: bool,
}

impl DailyProgress {
    /// Nothing done yet towards `target`
    pub fn empty(target: u32) -> Self {
        Self {
            completed: 0,
            target,
            percentage: 0,
            is_complete: false,
        }
    }
}

impl Default for DailyProgress {
    fn default() -> Self {
        Self::empty(DEFAULT_WORDS_TARGET)
    }
}

pub struct DailyChallengeManager {
    services: Services,
    words_target: u32,
    challenge: DailyChallenge,
}

impl DailyChallengeManager {
    pub fn new(services: Services) -> Self {
        Self::with_target(services, DEFAULT_WORDS_TARGET)
    }

    /// Manager whose newly created challenges ask for `words_target` words.
    ///
    /// A challenge already stored for today keeps its own target.
    pub fn with_target(services: Services, words_target: u32) -> Self {
        let words_target = words_target.max(1);
        let today = services.clock.today();

        let challenge = match load_record::<DailyChallenge>(services.store.as_ref(), DAILY_KEY) {
            Ok(Some(saved)) if saved.date == format_day(today) => {
                debug!(
                    "Loaded daily challenge {} ({}/{})",
                    saved.date, saved.words_completed, saved.words_target
                );
                Some(saved)
            }
            Ok(Some(saved)) => {
                debug!("Stored daily challenge is from {}, starting a new one", saved.date);
                None
            }
            Ok(None) => None,
            Err(e) => {
                debug!("Could not load daily challenge, starting a new one: {}", e);
                None
            }
        };

        let mut manager = Self {
            services,
            words_target,
            challenge: DailyChallenge {
                date: format_day(today),
                words_target,
                words_completed: 0,
                games_played: Vec::new(),
                completed: false,
                streak_days: 0,
            },
        };

        match challenge {
            Some(saved) => manager.challenge = saved,
            None => manager.create_new_challenge(today),
        }
        manager
    }

    /// The loaded challenge, which may belong to an earlier day until the
    /// next mutation or [`Self::refresh`]
    pub fn challenge(&self) -> &DailyChallenge {
        &self.challenge
    }

    /// Start today's challenge if the loaded one is from another day.
    ///
    /// Returns true when a new challenge was created.
    pub fn refresh(&mut self) -> bool {
        let today = self.services.clock.today();
        if self.is_for(today) {
            return false;
        }
        self.create_new_challenge(today);
        true
    }

    /// Count one learned word towards today's goal
    pub fn add_word(&mut self) {
        self.refresh();

        self.challenge.words_completed = self.challenge.words_completed.saturating_add(1);

        if self.challenge.words_completed >= self.challenge.words_target && !self.challenge.completed
        {
            self.challenge.completed = true;
            self.update_streak();
            self.show_completion_celebration();
            info!(
                "Daily challenge {} completed, streak {}",
                self.challenge.date, self.challenge.streak_days
            );
        }

        self.save();
    }

    /// Record that a game was played today; repeats are ignored
    pub fn add_game_played(&mut self, game_id: &str) {
        self.refresh();

        if !self.challenge.games_played.iter().any(|g| g == game_id) {
            self.challenge.games_played.push(game_id.to_string());
            self.save();
        }
    }

    pub fn get_progress(&self) -> DailyProgress {
        if !self.is_for(self.services.clock.today()) {
            return DailyProgress::empty(self.words_target);
        }

        DailyProgress {
            completed: self.challenge.words_completed,
            target: self.challenge.words_target,
            percentage: percentage(self.challenge.words_completed, self.challenge.words_target),
            is_complete: self.challenge.completed,
        }
    }

    pub fn get_streak_days(&self) -> u32 {
        let today = self.services.clock.today();
        if self.is_for(today) {
            self.challenge.streak_days
        } else {
            self.current_streak(today)
        }
    }

    fn is_for(&self, day: NaiveDate) -> bool {
        self.challenge.date == format_day(day)
    }

    fn create_new_challenge(&mut self, today: NaiveDate) {
        let streak = self.current_streak(today);
        self.challenge = DailyChallenge {
            date: format_day(today),
            words_target: self.words_target,
            words_completed: 0,
            games_played: Vec::new(),
            completed: false,
            streak_days: streak,
        };
        debug!(
            "Created daily challenge {} (target {}, streak {})",
            self.challenge.date, self.words_target, streak
        );
        self.save();
    }

    /// Streak value carried into `today`, 0 if the record is missing,
    /// unreadable or too old
    fn current_streak(&self, today: NaiveDate) -> u32 {
        match load_record::<StreakRecord>(self.services.store.as_ref(), STREAK_KEY) {
            Ok(Some(record)) => record.current_on(today),
            Ok(None) => 0,
            Err(LoadError::Parse(e)) => {
                debug!("Ignoring malformed streak record: {}", e);
                0
            }
            Err(e) => {
                debug!("Could not read streak record: {}", e);
                0
            }
        }
    }

    fn update_streak(&mut self) {
        let today = self.services.clock.today();
        let streak = self.current_streak(today).saturating_add(1);

        let record = StreakRecord::new(today, streak);
        if let Err(e) = save_json(self.services.store.as_ref(), STREAK_KEY, &record) {
            warn!("Failed to save streak record: {}", e);
        }
        self.challenge.streak_days = streak;
    }

    fn show_completion_celebration(&self) {
        self.services.notifier.trigger_confetti();
        self.services
            .notifier
            .show_toast(COMPLETION_TOAST, ToastKind::Success);
    }

    fn save(&self) {
        if let Err(e) = save_json(self.services.store.as_ref(), DAILY_KEY, &self.challenge) {
            warn!("Failed to save daily challenge: {}", e);
        }
    }
}

/// Rounded share of `target` reached, capped at 100
fn percentage(completed: u32, target: u32) -> u32 {
    if target == 0 {
        return 100;
    }
    let pct = (f64::from(completed) / f64::from(target) * 100.0).round();
    pct.min(100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notification;
    use crate::storage::KeyValueStore;
    use crate::test_support::TestEnv;

    fn stored_challenge(env: &TestEnv) -> DailyChallenge {
        let raw = env.store.get(DAILY_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn stored_streak(env: &TestEnv) -> Option<StreakRecord> {
        env.store
            .get(STREAK_KEY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn test_first_load_creates_and_persists_challenge() {
        let env = TestEnv::new();
        let manager = DailyChallengeManager::new(env.services());

        let stored = stored_challenge(&env);
        assert_eq!(stored.date, "2024-03-10");
        assert_eq!(stored.words_target, 5);
        assert_eq!(stored.words_completed, 0);
        assert!(!stored.completed);
        assert_eq!(manager.get_progress(), DailyProgress::empty(5));
        assert_eq!(manager.get_streak_days(), 0);
    }

    #[test]
    fn test_persisted_field_names() {
        let env = TestEnv::new();
        let mut manager = DailyChallengeManager::new(env.services());
        manager.add_game_played("flashcards");

        let raw = env.store.get(DAILY_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["wordsTarget"], 5);
        assert_eq!(value["wordsCompleted"], 0);
        assert_eq!(value["gamesPlayed"][0], "flashcards");
        assert_eq!(value["streakDays"], 0);
    }

    #[test]
    fn test_progress_three_of_five() {
        let env = TestEnv::new();
        let mut manager = DailyChallengeManager::new(env.services());
        for _ in 0..3 {
            manager.add_word();
        }

        assert_eq!(
            manager.get_progress(),
            DailyProgress {
                completed: 3,
                target: 5,
                percentage: 60,
                is_complete: false,
            }
        );
        assert!(env.notifier.events().is_empty());
    }

    #[test]
    fn test_completion_happens_exactly_once() {
        let env = TestEnv::new();
        let mut manager = DailyChallengeManager::new(env.services());

        for _ in 0..5 {
            manager.add_word();
        }
        assert!(manager.get_progress().is_complete);
        assert_eq!(manager.get_streak_days(), 1);
        assert_eq!(
            stored_streak(&env),
            Some(StreakRecord {
                date: "2024-03-10".to_string(),
                count: 1,
            })
        );
        assert_eq!(
            env.notifier.events(),
            vec![
                Notification::Confetti,
                Notification::Toast {
                    message: COMPLETION_TOAST.to_string(),
                    kind: ToastKind::Success,
                },
            ]
        );

        manager.add_word();
        manager.add_word();
        assert_eq!(manager.get_streak_days(), 1);
        assert_eq!(stored_streak(&env).unwrap().count, 1);
        assert_eq!(env.notifier.confetti_count(), 1);

        let progress = manager.get_progress();
        assert_eq!(progress.completed, 7);
        assert_eq!(progress.percentage, 100);
    }

    #[test]
    fn test_streak_continues_from_yesterday() {
        let env = TestEnv::new();
        env.store
            .set(STREAK_KEY, r#"{"date":"2024-03-09","count":4}"#)
            .unwrap();

        let mut manager = DailyChallengeManager::new(env.services());
        assert_eq!(manager.get_streak_days(), 4);

        for _ in 0..5 {
            manager.add_word();
        }
        assert_eq!(manager.get_streak_days(), 5);
        assert_eq!(stored_streak(&env).unwrap().count, 5);
    }

    #[test]
    fn test_streak_gap_resets_then_counts_one() {
        let env = TestEnv::new();
        env.store
            .set(STREAK_KEY, r#"{"date":"2024-03-07","count":9}"#)
            .unwrap();

        let mut manager = DailyChallengeManager::new(env.services());
        assert_eq!(manager.get_streak_days(), 0);

        for _ in 0..5 {
            manager.add_word();
        }
        assert_eq!(manager.get_streak_days(), 1);
        assert_eq!(
            stored_streak(&env),
            Some(StreakRecord {
                date: "2024-03-10".to_string(),
                count: 1,
            })
        );
    }

    #[test]
    fn test_malformed_streak_counts_as_zero() {
        let env = TestEnv::new();
        env.store.set(STREAK_KEY, "garbage").unwrap();

        let mut manager = DailyChallengeManager::new(env.services());
        assert_eq!(manager.get_streak_days(), 0);
        for _ in 0..5 {
            manager.add_word();
        }
        assert_eq!(manager.get_streak_days(), 1);
    }

    #[test]
    fn test_reload_same_day_keeps_progress() {
        let env = TestEnv::new();
        {
            let mut manager = DailyChallengeManager::new(env.services());
            manager.add_word();
            manager.add_word();
            manager.add_game_played("quiz");
        }

        let manager = DailyChallengeManager::new(env.services());
        assert_eq!(manager.get_progress().completed, 2);
        assert_eq!(manager.challenge().games_played, vec!["quiz".to_string()]);
    }

    #[test]
    fn test_yesterdays_challenge_is_replaced() {
        let env = TestEnv::new();
        env.store
            .set(
                DAILY_KEY,
                r#"{"date":"2024-03-09","wordsTarget":5,"wordsCompleted":5,"gamesPlayed":["quiz"],"completed":true,"streakDays":3}"#,
            )
            .unwrap();
        env.store
            .set(STREAK_KEY, r#"{"date":"2024-03-09","count":3}"#)
            .unwrap();

        let manager = DailyChallengeManager::new(env.services());
        let challenge = manager.challenge();
        assert_eq!(challenge.date, "2024-03-10");
        assert_eq!(challenge.words_completed, 0);
        assert!(challenge.games_played.is_empty());
        assert!(!challenge.completed);
        assert_eq!(challenge.streak_days, 3);
        assert_eq!(stored_challenge(&env).date, "2024-03-10");
    }

    #[test]
    fn test_malformed_challenge_falls_back_to_fresh() {
        let env = TestEnv::new();
        env.store.set(DAILY_KEY, "{\"date\": 17").unwrap();

        let manager = DailyChallengeManager::new(env.services());
        assert_eq!(manager.get_progress(), DailyProgress::empty(5));
        assert_eq!(stored_challenge(&env).date, "2024-03-10");
    }

    #[test]
    fn test_positional_records_are_rejected() {
        let env = TestEnv::new();
        env.store
            .set(DAILY_KEY, r#"["2024-03-10",5,4,["quiz"],false,2]"#)
            .unwrap();
        env.store.set(STREAK_KEY, r#"["2024-03-09",4]"#).unwrap();

        let manager = DailyChallengeManager::new(env.services());
        assert_eq!(manager.get_progress(), DailyProgress::empty(5));
        assert!(manager.challenge().games_played.is_empty());
        assert_eq!(manager.get_streak_days(), 0);
        assert_eq!(stored_challenge(&env).words_completed, 0);
    }

    #[test]
    fn test_day_ends_at_utc_midnight() {
        let env = TestEnv::new();
        let late = NaiveDate::from_ymd_opt(2024, 3, 10)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .unwrap()
            .and_utc();
        env.clock.set(late);

        let mut manager = DailyChallengeManager::new(env.services());
        for _ in 0..5 {
            manager.add_word();
        }
        assert!(manager.get_progress().is_complete);

        env.clock.set(late + chrono::Duration::seconds(2));
        assert_eq!(manager.get_progress(), DailyProgress::empty(5));
        assert_eq!(manager.get_streak_days(), 1);
    }

    #[test]
    fn test_completion_without_ui_hooks() {
        let mut manager = DailyChallengeManager::new(Services::in_memory());
        for _ in 0..5 {
            manager.add_word();
        }
        assert!(manager.get_progress().is_complete);
        assert_eq!(manager.get_streak_days(), 1);
    }

    #[test]
    fn test_add_game_played_ignores_repeats() {
        let env = TestEnv::new();
        let mut manager = DailyChallengeManager::new(env.services());
        manager.add_game_played("quiz");
        manager.add_game_played("memory");
        manager.add_game_played("quiz");

        assert_eq!(
            manager.challenge().games_played,
            vec!["quiz".to_string(), "memory".to_string()]
        );
        assert_eq!(stored_challenge(&env).games_played.len(), 2);
    }

    #[test]
    fn test_rollover_while_running() {
        let env = TestEnv::new();
        let mut manager = DailyChallengeManager::new(env.services());
        for _ in 0..5 {
            manager.add_word();
        }
        assert_eq!(manager.get_streak_days(), 1);

        env.clock.advance_days(1);
        assert_eq!(manager.get_progress(), DailyProgress::empty(5));
        assert_eq!(manager.get_streak_days(), 1);

        manager.add_word();
        assert_eq!(manager.challenge().date, "2024-03-11");
        assert_eq!(manager.get_progress().completed, 1);

        for _ in 0..4 {
            manager.add_word();
        }
        assert_eq!(manager.get_streak_days(), 2);
    }

    #[test]
    fn test_refresh_reports_new_challenge() {
        let env = TestEnv::new();
        let mut manager = DailyChallengeManager::new(env.services());
        assert!(!manager.refresh());

        env.clock.advance_days(3);
        assert!(manager.refresh());
        assert_eq!(manager.challenge().date, "2024-03-13");
    }

    #[test]
    fn test_custom_target() {
        let env = TestEnv::new();
        let mut manager = DailyChallengeManager::with_target(env.services(), 2);
        manager.add_word();
        assert_eq!(manager.get_progress().percentage, 50);
        manager.add_word();
        assert!(manager.get_progress().is_complete);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(9, 5), 100);
        assert_eq!(percentage(0, 0), 100);
    }

    #[test]
    fn test_default_progress() {
        assert_eq!(
            DailyProgress::default(),
            DailyProgress {
                completed: 0,
                target: 5,
                percentage: 0,
                is_complete: false,
            }
        );
    }
}
