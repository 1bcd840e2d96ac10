use anyhow::bail;

use super::structure::{ChatBotConfigInner, ChatBotConfigTOML};
use std::{
    ops::{Deref, DerefMut},
    path::PathBuf,
};

#[derive(Debug, Clone)]
pub struct ChatBotConfig {
    pub path: PathBuf,
    cached: ChatBotConfigTOML,
}

impl ChatBotConfig {
    /// Reads the config at `path`, writing a default one if nothing exists yet.
    pub fn read(path: PathBuf) -> Result<Self, anyhow::Error> {
        let path = match path.is_dir() {
            true => path.join("config.toml"),
            false => path,
        };

        if !path.exists() {
            log::warn!("no config at {}, writing defaults", path.display());
            return Ok(Self::new(path)?);
        }

        if !path.is_file() {
            bail!(
                "Given path exists and is not a file... either change the path or delete the file."
            );
        }

        let config_str = std::fs::read_to_string(&path)?;

        Ok(Self {
            path,
            cached: toml::from_str(&config_str)?,
        })
    }

    /// Re-reads the file and swaps in its contents. Returns whether anything
    /// changed.
    pub fn update(&mut self) -> Result<bool, anyhow::Error> {
        let new = Self::read(self.path.clone())?;

        match self.cached.config == new.cached.config {
            true => Ok(false),
            false => {
                self.cached = new.cached;
                Ok(true)
            }
        }
    }

    fn new(path: PathBuf) -> Result<Self, anyhow::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let config = Self {
            path,
            cached: ChatBotConfigTOML::default(),
        };

        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        std::fs::write(&self.path, toml::to_string(&self.cached)?)?;

        Ok(())
    }
}

impl Deref for ChatBotConfig {
    type Target = ChatBotConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.cached.config
    }
}

impl DerefMut for ChatBotConfig {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cached.config
    }
}

impl PartialEq for ChatBotConfig {
    fn eq(&self, other: &Self) -> bool {
        self.cached.config == other.cached.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("edubot-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = scratch_dir("create");
        let config = ChatBotConfig::read(dir.join("nested").join("config.toml")).unwrap();

        assert!(config.path.is_file());
        assert_eq!(config.bot.name, "EduBot");

        let again = ChatBotConfig::read(config.path.clone()).unwrap();
        assert_eq!(again, config);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn update_picks_up_edits_once() {
        let dir = scratch_dir("update");
        let mut config = ChatBotConfig::read(dir.join("config.toml")).unwrap();
        assert!(!config.update().unwrap());

        let mut edited = config.clone();
        edited.bot.name = "Ada".to_string();
        edited.bot.cancel_pending = true;
        edited.save().unwrap();

        assert!(config.update().unwrap());
        assert_eq!(config.bot.name, "Ada");
        assert!(config.bot.cancel_pending);
        assert!(!config.update().unwrap());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn update_fails_on_broken_files() {
        let dir = scratch_dir("broken");
        let mut config = ChatBotConfig::read(dir.join("config.toml")).unwrap();

        std::fs::write(&config.path, "[config.bot\nname = ").unwrap();
        assert!(config.update().is_err());
        assert_eq!(config.bot.name, "EduBot");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn directories_resolve_to_config_toml() {
        let dir = scratch_dir("dir");
        std::fs::create_dir_all(&dir).unwrap();

        let config = ChatBotConfig::read(dir.clone()).unwrap();
        assert_eq!(config.path, dir.join("config.toml"));

        let _ = std::fs::remove_dir_all(dir);
    }
}
