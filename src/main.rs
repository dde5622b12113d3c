use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "snabba")]
#[command(about = "SnabbaLexin learner state - daily challenge, mistakes and XP")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.snabbalexin/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding learner state (overrides storage.data_dir)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show daily challenge, level and mistakes at a glance
    Status,

    /// Record newly learned words
    Word {
        /// Number of words learned
        #[arg(default_value_t = 1)]
        count: u32,
    },

    /// Record a finished game
    Game {
        /// Game identifier (e.g. "flashcards")
        id: String,
    },

    /// Record a wrong answer
    Mistake {
        /// The word that was missed
        word: String,
        /// Its translation
        translation: String,
        /// Game in which the mistake happened
        #[arg(long, default_value = "manual")]
        game: String,
        /// The answer that would have been correct
        #[arg(long)]
        answer: Option<String>,
    },

    /// Stop reviewing a word
    Learned {
        word: String,
    },

    /// List tracked mistakes, most missed first
    Mistakes {
        /// Show only the first N entries
        #[arg(long)]
        top: Option<usize>,
        /// Only words missed at least twice
        #[arg(long)]
        frequent: bool,
    },

    /// Forget all tracked mistakes
    ClearMistakes,

    /// Unlock an achievement by id
    Achievement {
        id: String,
    },

    /// List achievements
    Achievements,

    /// Print widget markup
    Render {
        #[arg(value_enum)]
        widget: cli::render::Widget,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let paths = cli::Paths {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    match cli.command {
        Some(Commands::Init { force }) => cli::init::init_command(&paths, force)?,
        Some(Commands::Word { count }) => cli::record::word_command(&paths, count)?,
        Some(Commands::Game { id }) => cli::record::game_command(&paths, &id)?,
        Some(Commands::Mistake {
            word,
            translation,
            game,
            answer,
        }) => cli::mistakes::add_command(&paths, word, translation, game, answer)?,
        Some(Commands::Learned { word }) => cli::mistakes::learned_command(&paths, &word)?,
        Some(Commands::Mistakes { top, frequent }) => {
            cli::mistakes::list_command(&paths, top, frequent)?
        }
        Some(Commands::ClearMistakes) => cli::mistakes::clear_command(&paths)?,
        Some(Commands::Achievement { id }) => cli::record::achievement_command(&paths, &id)?,
        Some(Commands::Achievements) => cli::status::achievements_command(&paths)?,
        Some(Commands::Render { widget }) => cli::render::render_command(&paths, widget)?,
        Some(Commands::Status) | None => cli::status::status_command(&paths)?,
    }

    Ok(())
}
