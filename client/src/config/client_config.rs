use colour_sort_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use colour_sort_common::games::colour_sort::GameSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "colour_sort_client.yaml";
const PROGRESS_FILE_NAME: &str = "colour_sort_progress.yaml";

fn path_next_to_executable(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&path_next_to_executable(CONFIG_FILE_NAME)),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub game: GameSettings,
    pub progress_file: String,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.progress_file.is_empty() {
            return Err("progress file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            progress_file: path_next_to_executable(PROGRESS_FILE_NAME),
            log_prefix: None,
        }
    }
}
