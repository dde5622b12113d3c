//! Init command implementation

use anyhow::{Context, Result, bail};
use tracing::info;

use super::Paths;

/// Default configuration content for snabba init
pub const DEFAULT_CONFIG: &str = r#"# SnabbaLexin configuration
# ==========================

# Where learner state is kept.
#   backend  - "files" (one JSON file per record) or "sqlite"
#   data_dir - defaults to ~/.snabbalexin
[storage]
backend = "files"

# Daily challenge
#   words_target - new words per day to complete the challenge
[daily]
words_target = 5

# Mistakes review
#   max_entries - tracked words; the least recently missed are dropped first
[mistakes]
max_entries = 50

# XP per event
[rewards]
word_xp = 10
game_xp = 25
"#;

pub fn init_command(paths: &Paths, force: bool) -> Result<()> {
    let config_path = paths.config_path();

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    info!("Created {}", config_path.display());
    println!("Created {}", config_path.display());
    Ok(())
}
