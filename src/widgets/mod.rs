//! Widget markup for the learner-state managers
//!
//! The `*_widget` / [`mistakes_review`] functions are pure projections of
//! manager state into HTML. The `render_*` wrappers write that markup into a
//! named container of a [`MarkupSink`] and do nothing if it does not exist.

mod page;

pub use page::Page;

use crate::daily::{DailyChallengeManager, DailyProgress};
use crate::mistakes::{MistakeEntry, MistakesManager};
use crate::progress::{LevelName, LevelProgress, ProgressManager, UserProgress};

/// Container ids used by the app pages
pub const DAILY_CONTAINER: &str = "dailyChallengeContainer";
pub const MISTAKES_CONTAINER: &str = "mistakesContainer";
pub const PROGRESS_CONTAINER: &str = "progressContainer";

/// Something that holds containers addressable by id
pub trait MarkupSink {
    /// Replace the contents of `container_id`.
    ///
    /// Returns false if there is no such container.
    fn replace_contents(&mut self, container_id: &str, markup: &str) -> bool;
}

/// Escape text for both element content and quoted attributes
fn text(s: &str) -> String {
    ammonia::clean_text(s)
}

pub fn daily_challenge_widget(progress: &DailyProgress, streak: u32) -> String {
    let streak_badge = if streak > 0 {
        format!(r#"<span class="daily-streak">🔥 {}</span>"#, streak)
    } else {
        String::new()
    };

    let footer = if progress.is_complete {
        r#"<div class="daily-complete-badge">✅ مكتمل / Klart!</div>"#.to_string()
    } else {
        format!(
            r#"<div class="daily-hint">تعلم {0} كلمات جديدة / Lär dig {0} nya ord</div>"#,
            progress.target
        )
    };

    format!(
        r#"<div class="daily-widget{completed}">
    <div class="daily-widget-header">
        <span class="daily-widget-title">📅 تحدي اليوم / Dagens Utmaning</span>
        {streak_badge}
    </div>
    <div class="daily-widget-progress">
        <div class="daily-progress-bar">
            <div class="daily-progress-fill" style="width: {percentage}%"></div>
        </div>
        <span class="daily-progress-text">{done}/{target}</span>
    </div>
    {footer}
</div>"#,
        completed = if progress.is_complete { " completed" } else { "" },
        streak_badge = streak_badge,
        percentage = progress.percentage,
        done = progress.completed,
        target = progress.target,
        footer = footer,
    )
}

/// Review list in the order given; pass [`MistakesManager::get_mistakes`]
/// for most-missed first
pub fn mistakes_review(mistakes: &[MistakeEntry]) -> String {
    if mistakes.is_empty() {
        return r#"<div class="mistakes-empty">
    <div class="mistakes-empty-icon">🎉</div>
    <h3>No Mistakes Yet!</h3>
    <p>لا توجد أخطاء بعد! / Inga fel ännu!</p>
</div>"#
            .to_string();
    }

    let cards: Vec<String> = mistakes.iter().map(mistake_card).collect();

    format!(
        r#"<div class="mistakes-header">
    <h2>مراجعة أخطائي / Mina Fel</h2>
    <span class="mistakes-count">{count} كلمة / ord</span>
</div>
<div class="mistakes-list">
{cards}
</div>"#,
        count = mistakes.len(),
        cards = cards.join("\n"),
    )
}

fn mistake_card(m: &MistakeEntry) -> String {
    let word = text(&m.word);
    let answer = m
        .correct_answer
        .as_deref()
        .map(|a| format!(r#"<div class="mistake-answer">✓ {}</div>"#, text(a)))
        .unwrap_or_default();

    format!(
        r#"    <div class="mistake-card" data-word="{word}">
        <div class="mistake-word">{word}</div>
        <div class="mistake-translation">{translation}</div>
        {answer}
        <div class="mistake-meta">
            <span class="mistake-attempts">❌ {attempts} مرة</span>
            <span class="mistake-game">{game}</span>
        </div>
        <div class="mistake-actions">
            <button class="mistake-practice" data-action="practice" data-word="{word}">🎯 تمرن / Öva</button>
            <button class="mistake-learned" data-action="learned" data-word="{word}">✓ تعلمتها</button>
        </div>
    </div>"#,
        word = word,
        translation = text(&m.translation),
        answer = answer,
        attempts = m.attempts,
        game = text(&m.game),
    )
}

pub fn progress_widget(progress: &UserProgress, level: &LevelProgress, name: LevelName) -> String {
    format!(
        r#"<div class="progress-widget">
    <div class="progress-level">
        <span class="level-badge">Lv.{level_number}</span>
        <span class="level-name">{ar} / {sv}</span>
    </div>
    <div class="progress-xp">
        <div class="xp-bar">
            <div class="xp-fill" style="width: {percentage}%"></div>
        </div>
        <span class="xp-text">{current} / {next} XP</span>
    </div>
    <div class="progress-stats">
        <div class="stat">
            <span class="stat-value">{words}</span>
            <span class="stat-label">كلمة / Ord</span>
        </div>
        <div class="stat">
            <span class="stat-value">{games}</span>
            <span class="stat-label">لعبة / Spel</span>
        </div>
    </div>
</div>"#,
        level_number = progress.level,
        ar = name.ar,
        sv = name.sv,
        percentage = level.percentage,
        current = level.current,
        next = level.next,
        words = progress.total_words,
        games = progress.games_completed,
    )
}

pub fn render_daily_challenge_widget(
    sink: &mut dyn MarkupSink,
    container_id: &str,
    manager: &DailyChallengeManager,
) -> bool {
    let markup = daily_challenge_widget(&manager.get_progress(), manager.get_streak_days());
    sink.replace_contents(container_id, &markup)
}

pub fn render_mistakes_review(
    sink: &mut dyn MarkupSink,
    container_id: &str,
    manager: &MistakesManager,
) -> bool {
    let markup = mistakes_review(&manager.get_mistakes());
    sink.replace_contents(container_id, &markup)
}

pub fn render_progress_widget(
    sink: &mut dyn MarkupSink,
    container_id: &str,
    manager: &ProgressManager,
) -> bool {
    let markup = progress_widget(
        &manager.get_progress(),
        &manager.get_level_progress(),
        manager.get_level_name(),
    );
    sink.replace_contents(container_id, &markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mistakes::NewMistake;
    use crate::test_support::TestEnv;

    #[test]
    fn test_daily_widget_in_progress() {
        let progress = DailyProgress {
            completed: 3,
            target: 5,
            percentage: 60,
            is_complete: false,
        };
        let html = daily_challenge_widget(&progress, 0);
        assert!(html.contains(r#"class="daily-widget""#));
        assert!(html.contains("width: 60%"));
        assert!(html.contains("3/5"));
        assert!(html.contains("Lär dig 5 nya ord"));
        assert!(!html.contains("daily-streak"));
        assert!(!html.contains("daily-complete-badge"));
    }

    #[test]
    fn test_daily_widget_completed_with_streak() {
        let progress = DailyProgress {
            completed: 5,
            target: 5,
            percentage: 100,
            is_complete: true,
        };
        let html = daily_challenge_widget(&progress, 4);
        assert!(html.contains("daily-widget completed"));
        assert!(html.contains("🔥 4"));
        assert!(html.contains("daily-complete-badge"));
    }

    #[test]
    fn test_mistakes_review_empty() {
        let html = mistakes_review(&[]);
        assert!(html.contains("mistakes-empty"));
        assert!(!html.contains("mistakes-list"));
    }

    #[test]
    fn test_mistakes_review_escapes_text() {
        let entry = MistakeEntry {
            word: "<b>hund</b>".to_string(),
            translation: "كلب".to_string(),
            game: "quiz".to_string(),
            timestamp: 0,
            attempts: 3,
            correct_answer: Some("كلب".to_string()),
        };
        let html = mistakes_review(&[entry]);
        assert!(html.contains("mistakes-count\">1 كلمة"));
        assert!(html.contains("❌ 3 مرة"));
        assert!(html.contains("&lt;b&gt;hund&lt;&#47;b&gt;"));
        assert!(!html.contains("<b>hund"));
        assert!(html.contains("mistake-answer"));
    }

    #[test]
    fn test_progress_widget() {
        let progress = UserProgress {
            xp: 150,
            level: 2,
            total_words: 15,
            ..UserProgress::default()
        };
        let level = LevelProgress::new(150, 2);
        let html = progress_widget(&progress, &level, crate::progress::Level::clamped(2).name);
        assert!(html.contains("Lv.2"));
        assert!(html.contains("متدرب / Lärling"));
        assert!(html.contains("width: 33%"));
        assert!(html.contains("50 / 150 XP"));
        assert!(html.contains(r#"<span class="stat-value">15</span>"#));
    }

    #[test]
    fn test_render_into_page() {
        let env = TestEnv::new();
        let mut mistakes = MistakesManager::new(env.services());
        mistakes.add_mistake(NewMistake::new("sol", "شمس", "quiz"));
        let daily = DailyChallengeManager::new(env.services());

        let mut page = Page::with_containers([MISTAKES_CONTAINER]);
        assert!(render_mistakes_review(&mut page, MISTAKES_CONTAINER, &mistakes));
        assert!(page.contents(MISTAKES_CONTAINER).unwrap().contains("sol"));

        // no such container on this page
        assert!(!render_daily_challenge_widget(&mut page, DAILY_CONTAINER, &daily));
        assert!(page.contents(DAILY_CONTAINER).is_none());
    }
}
