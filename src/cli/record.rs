//! Learner event commands

use anyhow::{Result, bail};

use snabbalexin::progress::Achievement;

use super::Paths;

pub fn word_command(paths: &Paths, count: u32) -> Result<()> {
    let mut app = paths.open_app()?;
    for _ in 0..count {
        app.record_word_learned();
    }

    let daily = app.daily().get_progress();
    let progress = app.progress().get_progress();
    println!(
        "Today: {}/{} words ({}%) - total XP {}",
        daily.completed, daily.target, daily.percentage, progress.xp
    );
    Ok(())
}

pub fn game_command(paths: &Paths, game_id: &str) -> Result<()> {
    let mut app = paths.open_app()?;
    app.record_game_completed(game_id);

    let progress = app.progress().get_progress();
    println!(
        "Game '{}' completed - {} games, {} XP",
        game_id, progress.games_completed, progress.xp
    );
    Ok(())
}

pub fn achievement_command(paths: &Paths, id: &str) -> Result<()> {
    let Some(achievement) = Achievement::find(id) else {
        bail!("Unknown achievement: {}", id);
    };

    let mut app = paths.open_app()?;
    if app.progress_mut().unlock_achievement(id) {
        println!("Unlocked {}", achievement.announcement());
    } else {
        println!("Already unlocked: {}", achievement.title);
    }
    Ok(())
}
