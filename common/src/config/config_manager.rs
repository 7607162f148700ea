use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches one config value. A missing config yields the default.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.cached();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    /// Like `get_config`, but writes the default out when nothing is stored yet so there is a
    /// file to edit.
    pub fn get_or_create_config(&self) -> Result<TConfig, String> {
        if self.config_content_provider.get_config_content()?.is_none() {
            self.set_config(&TConfig::default())?;
        }
        self.get_config()
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.cached() = Some(config.clone());
        Ok(())
    }

    fn cached(&self) -> MutexGuard<'_, Option<TConfig>> {
        self.config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        board_size: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { board_size: 18 }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.board_size < 7 {
                return Err("board_size must be at least 7".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
        writes: RefCell<u32>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }

    fn manager_with(content: Option<&str>) -> ConfigManager<MemoryContentProvider, TestConfig> {
        let provider = MemoryContentProvider {
            content: RefCell::new(content.map(str::to_string)),
            writes: RefCell::new(0),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = manager_with(None);
        assert_eq!(manager.get_config(), Ok(TestConfig::default()));
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let manager = manager_with(Some("board_size: 25\n"));
        assert_eq!(manager.get_config(), Ok(TestConfig { board_size: 25 }));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let manager = manager_with(Some("board_size: 3\n"));
        let result = manager.get_config();
        assert!(result.is_err());
        assert!(result.unwrap_err().starts_with("Config validation error"));
    }

    #[test]
    fn test_malformed_yaml_cant_be_read() {
        let manager = manager_with(Some("board_size: [not a number\n"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager = manager_with(None);
        assert!(manager.set_config(&TestConfig { board_size: 2 }).is_err());
        assert_eq!(*manager.config_content_provider.writes.borrow(), 0);
    }

    #[test]
    fn test_saved_config_is_cached() {
        let manager = manager_with(None);
        manager.set_config(&TestConfig { board_size: 30 }).unwrap();
        *manager.config_content_provider.content.borrow_mut() = None;

        assert_eq!(manager.get_config(), Ok(TestConfig { board_size: 30 }));
    }

    #[test]
    fn test_get_or_create_writes_default_once() {
        let manager = manager_with(None);
        assert_eq!(manager.get_or_create_config(), Ok(TestConfig::default()));
        assert_eq!(manager.get_or_create_config(), Ok(TestConfig::default()));
        assert_eq!(*manager.config_content_provider.writes.borrow(), 1);
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let random_number: u32 = rand::random();
        let mut path = std::env::temp_dir();
        path.push(format!("temp_snake_config_{}.yaml", random_number));

        let manager: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(path.clone());
        manager.set_config(&TestConfig { board_size: 40 }).unwrap();

        let fresh: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(path);
        assert_eq!(fresh.get_config(), Ok(TestConfig { board_size: 40 }));
    }
}
