//! Achievement definitions and metadata
//!
//! Unlock conditions live with the quiz host; this catalog only names the
//! achievements and how they are announced.

use serde::Serialize;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    FirstQuiz,
    Streak5,
    Streak10,
    Correct50,
    Correct100,
    Correct500,
    SpeedDemon,
    Perfect10,
    Accuracy90,
    Quiz10,
}

impl AchievementId {
    /// String ID as stored in the progress record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstQuiz => "first_quiz",
            Self::Streak5 => "streak_5",
            Self::Streak10 => "streak_10",
            Self::Correct50 => "correct_50",
            Self::Correct100 => "correct_100",
            Self::Correct500 => "correct_500",
            Self::SpeedDemon => "speed_demon",
            Self::Perfect10 => "perfect_10",
            Self::Accuracy90 => "accuracy_90",
            Self::Quiz10 => "quiz_10",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_quiz" => Some(Self::FirstQuiz),
            "streak_5" => Some(Self::Streak5),
            "streak_10" => Some(Self::Streak10),
            "correct_50" => Some(Self::Correct50),
            "correct_100" => Some(Self::Correct100),
            "correct_500" => Some(Self::Correct500),
            "speed_demon" => Some(Self::SpeedDemon),
            "perfect_10" => Some(Self::Perfect10),
            "accuracy_90" => Some(Self::Accuracy90),
            "quiz_10" => Some(Self::Quiz10),
            _ => None,
        }
    }
}

/// Achievement metadata
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    #[serde(skip)]
    pub id: AchievementId,
    pub title: &'static str,
    pub title_ar: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Achievement {
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .unwrap_or(&ACHIEVEMENTS[0])
    }

    /// Look up by stored string ID
    pub fn find(id: &str) -> Option<&'static Achievement> {
        AchievementId::from_str(id).map(Self::get)
    }

    /// Toast text announcing the unlock
    pub fn announcement(&self) -> String {
        format!("{} {} - {}", self.icon, self.title, self.title_ar)
    }
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstQuiz,
        title: "Första testet",
        title_ar: "الاختبار الأول",
        description: "Avsluta ditt första quiz",
        icon: "🎯",
    },
    Achievement {
        id: AchievementId::Streak5,
        title: "5 i rad",
        title_ar: "5 متتالية",
        description: "Få 5 rätt svar i rad",
        icon: "🔥",
    },
    Achievement {
        id: AchievementId::Streak10,
        title: "10 i rad",
        title_ar: "10 متتالية",
        description: "Få 10 rätt svar i rad",
        icon: "⚡",
    },
    Achievement {
        id: AchievementId::Correct50,
        title: "50 rätt",
        title_ar: "50 صحيح",
        description: "Svara rätt på 50 frågor totalt",
        icon: "📚",
    },
    Achievement {
        id: AchievementId::Correct100,
        title: "100 rätt",
        title_ar: "100 صحيح",
        description: "Svara rätt på 100 frågor totalt",
        icon: "🏆",
    },
    Achievement {
        id: AchievementId::Correct500,
        title: "Ordmästare",
        title_ar: "سيد الكلمات",
        description: "Svara rätt på 500 frågor totalt",
        icon: "👑",
    },
    Achievement {
        id: AchievementId::SpeedDemon,
        title: "Snabbtänkt",
        title_ar: "سريع البديهة",
        description: "Svara på under 2 sekunder",
        icon: "⏱️",
    },
    Achievement {
        id: AchievementId::Perfect10,
        title: "Perfekt 10",
        title_ar: "عشرة مثالية",
        description: "Få 10/10 i ett quiz",
        icon: "💯",
    },
    Achievement {
        id: AchievementId::Accuracy90,
        title: "Träffsäker",
        title_ar: "دقة عالية",
        description: "Uppnå 90% noggrannhet (minst 50 svar)",
        icon: "🎯",
    },
    Achievement {
        id: AchievementId::Quiz10,
        title: "Flitig övare",
        title_ar: "متدرب مجتهد",
        description: "Avsluta 10 quiz",
        icon: "📝",
    },
];

/// Unlock tally for profile views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementProgress {
    pub unlocked: usize,
    pub total: usize,
    /// 0-100, rounded
    pub percent: u32,
}

impl AchievementProgress {
    pub fn new(unlocked: usize) -> Self {
        let total = ACHIEVEMENTS.len();
        let percent = if total == 0 {
            0
        } else {
            (unlocked as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            unlocked,
            total,
            percent,
        }
    }
}
