//! CLI command implementations

pub mod init;
pub mod mistakes;
pub mod record;
pub mod render;
pub mod status;

use std::path::PathBuf;

use anyhow::Result;

use snabbalexin::{App, Config};

/// Config and data locations given on the command line
pub struct Paths {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl Paths {
    /// Resolve the config path - uses the global config by default
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(Config::global_config_path)
    }

    /// Load the config and apply command-line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_or_default(path)?,
            None => Config::load()?,
        };
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        Ok(config)
    }

    pub fn open_app(&self) -> Result<App> {
        let config = self.load_config()?;
        App::open(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"/from/config\"\n").unwrap();

        let paths = Paths {
            config: Some(path.clone()),
            data_dir: None,
        };
        assert_eq!(paths.load_config().unwrap().data_dir(), PathBuf::from("/from/config"));

        let paths = Paths {
            config: Some(path),
            data_dir: Some(dir.path().join("state")),
        };
        assert_eq!(paths.load_config().unwrap().data_dir(), dir.path().join("state"));
    }
}
