//! SnabbaLexin learner state
//!
//! Client-side state for the SnabbaLexin Swedish/Arabic vocabulary trainer:
//! the daily word challenge with its streak, the review list of missed words,
//! and XP-based levels.
//!
//! ## Managers
//!
//! Each manager owns one JSON record in a [`storage::KeyValueStore`]. It loads
//! the record once when constructed, mutates it in memory and writes the whole
//! record back after every change. Unreadable records are replaced by fresh
//! ones; no manager operation fails.
//!
//! 1. [`daily::DailyChallengeManager`]: today's goal and consecutive-day streak
//! 2. [`mistakes::MistakesManager`]: wrong answers with attempt counts
//! 3. [`progress::ProgressManager`]: XP, level, totals and achievements
//!
//! [`app::App`] builds all three from a [`config::Config`] with shared
//! [`services::Services`]; [`widgets`] turns their state into markup.

pub mod app;
pub mod clock;
pub mod config;
pub mod daily;
pub mod mistakes;
pub mod notify;
pub mod progress;
pub mod services;
pub mod storage;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::App;
pub use config::Config;
pub use services::Services;
