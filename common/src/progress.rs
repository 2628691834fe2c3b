//! Persistence of the player's level, the only state kept across runs.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigManager, ConfigSerializer, Validate};
use crate::games::colour_sort::FIRST_LEVEL;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Progress {
    pub level: u32,
}

impl Validate for Progress {
    fn validate(&self) -> Result<(), String> {
        if self.level < FIRST_LEVEL {
            return Err(format!("Level must be at least {}, got {}", FIRST_LEVEL, self.level));
        }
        Ok(())
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self { level: FIRST_LEVEL }
    }
}

/// Key-value slot holding the current level.
pub trait LevelStore {
    fn load_level(&self) -> Result<u32, String>;
    fn save_level(&self, level: u32) -> Result<(), String>;
}

impl<TConfigContentProvider, TConfigSerializer> LevelStore
    for ConfigManager<TConfigContentProvider, Progress, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfigSerializer: ConfigSerializer<Progress>,
{
    fn load_level(&self) -> Result<u32, String> {
        Ok(self.get_config()?.level)
    }

    fn save_level(&self, level: u32) -> Result<(), String> {
        self.set_config(&Progress { level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileContentConfigProvider, MemoryContentProvider, YamlConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_colour_sort_progress_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_progress_starts_at_first_level() {
        let store: ConfigManager<_, Progress, _> =
            ConfigManager::new(MemoryContentProvider::new(), YamlConfigSerializer::new());
        assert_eq!(store.load_level(), Ok(FIRST_LEVEL));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store: ConfigManager<_, Progress, _> =
            ConfigManager::new(MemoryContentProvider::new(), YamlConfigSerializer::new());
        store.save_level(7).unwrap();
        assert_eq!(store.load_level(), Ok(7));
    }

    #[test]
    fn test_file_store_round_trip() {
        let file_path = get_temp_file_path();
        {
            let store: ConfigManager<_, Progress, _> = ConfigManager::from_yaml_file(&file_path);
            store.save_level(12).unwrap();
        }
        let reopened: ConfigManager<_, Progress, _> = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer::new(),
        );
        assert_eq!(reopened.load_level(), Ok(12));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_level_zero_cannot_be_saved() {
        let store: ConfigManager<_, Progress, _> =
            ConfigManager::new(MemoryContentProvider::new(), YamlConfigSerializer::new());
        assert!(store.save_level(0).is_err());
    }

    #[test]
    fn test_stored_level_zero_is_rejected_on_load() {
        let store: ConfigManager<_, Progress, _> = ConfigManager::new(
            MemoryContentProvider::with_content("level: 0\n"),
            YamlConfigSerializer::new(),
        );
        assert!(store.load_level().is_err());
    }
}
