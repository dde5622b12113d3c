//! Mistakes review commands

use anyhow::Result;
use chrono::DateTime;

use snabbalexin::mistakes::{MistakeEntry, NewMistake};

use super::Paths;

pub fn add_command(
    paths: &Paths,
    word: String,
    translation: String,
    game: String,
    answer: Option<String>,
) -> Result<()> {
    let mut app = paths.open_app()?;

    let mut mistake = NewMistake::new(word.clone(), translation, game);
    if let Some(answer) = answer {
        mistake = mistake.with_correct_answer(answer);
    }
    app.record_mistake(mistake);

    let attempts = app
        .mistakes()
        .get_mistakes()
        .into_iter()
        .find(|m| m.word == word)
        .map(|m| m.attempts)
        .unwrap_or(0);
    println!("Recorded '{}' ({} attempts)", word, attempts);
    Ok(())
}

pub fn learned_command(paths: &Paths, word: &str) -> Result<()> {
    let mut app = paths.open_app()?;
    let before = app.mistakes().get_mistake_count();
    app.mistakes_mut().mark_as_learned(word);

    if app.mistakes().get_mistake_count() < before {
        println!("Marked '{}' as learned", word);
    } else {
        println!("'{}' was not in the review list", word);
    }
    Ok(())
}

pub fn list_command(paths: &Paths, top: Option<usize>, frequent: bool) -> Result<()> {
    let app = paths.open_app()?;
    let manager = app.mistakes();

    let mut entries = if frequent {
        let mut entries = manager.get_frequent_mistakes();
        entries.sort_by(|a, b| b.attempts.cmp(&a.attempts));
        entries
    } else {
        manager.get_mistakes()
    };
    if let Some(n) = top {
        entries.truncate(n);
    }

    if entries.is_empty() {
        println!("No mistakes to review.");
        return Ok(());
    }

    println!("Mistakes ({}):\n", entries.len());
    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

pub fn clear_command(paths: &Paths) -> Result<()> {
    let mut app = paths.open_app()?;
    let count = app.mistakes().get_mistake_count();
    app.mistakes_mut().clear_all();
    println!("Cleared {} mistakes", count);
    Ok(())
}

fn print_entry(entry: &MistakeEntry) {
    let when = DateTime::from_timestamp_millis(entry.timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "  {} - {} [{}x, {}, {}]",
        entry.word, entry.translation, entry.attempts, entry.game, when
    );
    if let Some(answer) = &entry.correct_answer {
        println!("    Correct: {}", answer);
    }
}
