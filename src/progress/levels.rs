//! XP and Level system
//!
//! Defines level thresholds, bilingual titles, and XP calculations.

use serde::Serialize;

/// Level title in both course languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelName {
    pub sv: &'static str,
    pub ar: &'static str,
}

/// Level definition
#[derive(Debug, Clone)]
pub struct Level {
    pub level: u32,
    pub xp_required: u32,
    pub name: LevelName,
}

/// All level definitions (must be sorted by level, thresholds non-decreasing)
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        xp_required: 0,
        name: LevelName {
            sv: "Nybörjare",
            ar: "مبتدئ",
        },
    },
    Level {
        level: 2,
        xp_required: 100,
        name: LevelName {
            sv: "Lärling",
            ar: "متدرب",
        },
    },
    Level {
        level: 3,
        xp_required: 250,
        name: LevelName {
            sv: "Student",
            ar: "طالب",
        },
    },
    Level {
        level: 4,
        xp_required: 500,
        name: LevelName {
            sv: "Utforskare",
            ar: "مستكشف",
        },
    },
    Level {
        level: 5,
        xp_required: 1000,
        name: LevelName {
            sv: "Kunnig",
            ar: "ماهر",
        },
    },
    Level {
        level: 6,
        xp_required: 2000,
        name: LevelName {
            sv: "Expert",
            ar: "خبير",
        },
    },
    Level {
        level: 7,
        xp_required: 4000,
        name: LevelName {
            sv: "Mästare",
            ar: "أستاذ",
        },
    },
    Level {
        level: 8,
        xp_required: 7000,
        name: LevelName {
            sv: "Veteran",
            ar: "محترف",
        },
    },
    Level {
        level: 9,
        xp_required: 10000,
        name: LevelName {
            sv: "Legend",
            ar: "أسطورة",
        },
    },
    Level {
        level: 10,
        xp_required: 15000,
        name: LevelName {
            sv: "Champion",
            ar: "بطل",
        },
    },
];

impl Level {
    /// Highest level whose threshold `xp` has reached
    pub fn for_xp(xp: u32) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| xp >= l.xp_required)
            .unwrap_or(&LEVELS[0])
    }

    /// Definition of `level`, clamped into the table
    pub fn clamped(level: u32) -> &'static Level {
        let index = (level.max(1) as usize - 1).min(LEVELS.len() - 1);
        &LEVELS[index]
    }

    /// Get XP needed for next level (None if max level)
    pub fn xp_for_next(current_level: u32) -> Option<u32> {
        LEVELS
            .iter()
            .find(|l| l.level == current_level + 1)
            .map(|l| l.xp_required)
    }

    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }
}

/// XP position inside the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    /// XP earned since reaching the current level
    pub current: u32,
    /// XP span of the current level; 0 at max level
    pub next: u32,
    /// 0-100, rounded; 100 at max level
    pub percentage: u32,
}

impl LevelProgress {
    pub fn new(total_xp: u32, level: u32) -> Self {
        let level_info = Level::clamped(level);
        let current_level_xp = level_info.xp_required;
        let next_level_xp = Level::xp_for_next(level_info.level).unwrap_or(current_level_xp);

        let xp_in_level = total_xp.saturating_sub(current_level_xp);
        let xp_for_level = next_level_xp.saturating_sub(current_level_xp);

        let percentage = if xp_for_level == 0 {
            100
        } else {
            let pct = (f64::from(xp_in_level) / f64::from(xp_for_level) * 100.0).round();
            pct.min(100.0) as u32
        };

        Self {
            current: xp_in_level,
            next: xp_for_level,
            percentage,
        }
    }
}

/// XP rewards for learner events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpRewards {
    pub word: u32,
    pub game: u32,
}

impl XpRewards {
    /// XP for learning a new word
    pub const WORD: u32 = 10;

    /// XP for finishing a game
    pub const GAME: u32 = 25;
}

impl Default for XpRewards {
    fn default() -> Self {
        Self {
            word: Self::WORD,
            game: Self::GAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_xp() {
        assert_eq!(Level::for_xp(0).level, 1);
        assert_eq!(Level::for_xp(99).level, 1);
        assert_eq!(Level::for_xp(100).level, 2);
        assert_eq!(Level::for_xp(249).level, 2);
        assert_eq!(Level::for_xp(250).level, 3);
        assert_eq!(Level::for_xp(15000).level, 10);
        assert_eq!(Level::for_xp(u32::MAX).level, 10); // Beyond max
    }

    #[test]
    fn test_thresholds_sorted() {
        assert!(LEVELS.windows(2).all(|w| w[0].xp_required <= w[1].xp_required));
        assert!(LEVELS.iter().enumerate().all(|(i, l)| l.level as usize == i + 1));
        assert_eq!(Level::max_level(), 10);
    }

    #[test]
    fn test_level_progress_mid_level() {
        let progress = LevelProgress::new(150, 2);
        assert_eq!(
            progress,
            LevelProgress {
                current: 50,
                next: 150,
                percentage: 33,
            }
        );
    }

    #[test]
    fn test_level_progress_at_max_level() {
        let progress = LevelProgress::new(16000, 10);
        assert_eq!(progress.current, 1000);
        assert_eq!(progress.next, 0);
        assert_eq!(progress.percentage, 100);
    }

    #[test]
    fn test_clamped_names() {
        assert_eq!(Level::clamped(0).name.sv, "Nybörjare");
        assert_eq!(Level::clamped(3).name.sv, "Student");
        assert_eq!(Level::clamped(42).name.sv, "Champion");
    }
}
