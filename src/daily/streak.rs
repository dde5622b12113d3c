//! Cross-day streak record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{format_day, parse_day};

/// Persisted streak: the day of the last completed challenge and the count
/// reached on that day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub date: String,
    pub count: u32,
}

impl StreakRecord {
    pub fn new(day: NaiveDate, count: u32) -> Self {
        Self {
            date: format_day(day),
            count,
        }
    }

    /// Streak count still valid on `today`.
    ///
    /// The count carries over only when the record is dated today or
    /// yesterday. Older, future or unparseable dates count as no streak.
    pub fn current_on(&self, today: NaiveDate) -> u32 {
        let Some(last_day) = parse_day(&self.date) else {
            return 0;
        };

        match (today - last_day).num_days() {
            0 | 1 => self.count,
            _ => 0,
        }
    }
}
