use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::{DisplayConfig, GameConfig};

pub const DEFAULT_CONFIG_FILE: &str = "snake_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(file_path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        Ok(())
    }
}
