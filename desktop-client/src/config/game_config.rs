use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::{
    DEFAULT_BOARD_SIZE, DEFAULT_CANDY_PLACEMENT_ATTEMPTS, DEFAULT_INITIAL_SNAKE_LENGTH,
    DEFAULT_TICK_INTERVAL, SnakeSettings,
};
use std::time::Duration;

/// Rules applied when a game starts. Edits only take effect on restart.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: u32,
    pub initial_snake_length: u32,
    pub tick_interval_ms: u32,
    pub candy_placement_attempts: u32,
}

impl From<&GameConfig> for SnakeSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            board_size: config.board_size as usize,
            initial_snake_length: config.initial_snake_length as usize,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            candy_placement_attempts: config.candy_placement_attempts,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        SnakeSettings::from(self).validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE as u32,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            candy_placement_attempts: DEFAULT_CANDY_PLACEMENT_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_engine_settings() {
        let config = GameConfig {
            board_size: 12,
            initial_snake_length: 4,
            tick_interval_ms: 200,
            candy_placement_attempts: 50,
        };
        let settings = SnakeSettings::from(&config);
        assert_eq!(settings.board_size, 12);
        assert_eq!(settings.initial_snake_length, 4);
        assert_eq!(settings.tick_interval, Duration::from_millis(200));
        assert_eq!(settings.candy_placement_attempts, 50);
    }

    #[test]
    fn test_default_matches_engine_default() {
        assert_eq!(SnakeSettings::from(&GameConfig::default()), SnakeSettings::default());
    }

    #[test]
    fn test_too_fast_tick_rejected() {
        let config = GameConfig {
            tick_interval_ms: 1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
