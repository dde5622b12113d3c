//! Status and achievements commands

use anyhow::Result;

use snabbalexin::App;
use snabbalexin::mistakes::DEFAULT_TOP_MISTAKES;

use super::Paths;

pub fn status_command(paths: &Paths) -> Result<()> {
    let app = paths.open_app()?;
    print!("{}", format_status(&app));
    Ok(())
}

pub fn achievements_command(paths: &Paths) -> Result<()> {
    let app = paths.open_app()?;
    let progress = app.progress();
    let tally = progress.achievement_progress();

    println!(
        "Achievements {}/{} ({}%)\n",
        tally.unlocked, tally.total, tally.percent
    );
    for achievement in progress.unlocked_achievements() {
        println!("  [x] {}", achievement.announcement());
    }
    for achievement in progress.locked_achievements() {
        println!(
            "  [ ] {} {} - {} ({})",
            achievement.icon, achievement.title, achievement.description, achievement.id.as_str()
        );
    }
    Ok(())
}

fn format_status(app: &App) -> String {
    let daily = app.daily().get_progress();
    let streak = app.daily().get_streak_days();
    let progress = app.progress().get_progress();
    let level = app.progress().get_level_progress();
    let name = app.progress().get_level_name();
    let mistakes = app.mistakes().get_top_mistakes(DEFAULT_TOP_MISTAKES);

    let mut out = String::new();
    out.push_str("Daily challenge\n");
    out.push_str(&format!(
        "  {}/{} words ({}%){}\n",
        daily.completed,
        daily.target,
        daily.percentage,
        if daily.is_complete { " - complete" } else { "" }
    ));
    out.push_str(&format!("  Streak: {} days\n\n", streak));

    out.push_str(&format!("Level {} - {} / {}\n", progress.level, name.sv, name.ar));
    if level.next == 0 {
        out.push_str(&format!("  {} XP (max level)\n", progress.xp));
    } else {
        out.push_str(&format!(
            "  {} / {} XP to next level ({}%)\n",
            level.current, level.next, level.percentage
        ));
    }
    out.push_str(&format!(
        "  {} words, {} games\n\n",
        progress.total_words, progress.games_completed
    ));

    out.push_str(&format!(
        "Mistakes: {} tracked\n",
        app.mistakes().get_mistake_count()
    ));
    for entry in &mistakes {
        out.push_str(&format!(
            "  {} - {} ({}x)\n",
            entry.word, entry.translation, entry.attempts
        ));
    }
    out
}
