mod display_config;
mod game_config;
mod main_config;

pub use display_config::{DisplayConfig, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE};
pub use game_config::GameConfig;
pub use main_config::{ClientConfigManager, Config, DEFAULT_CONFIG_FILE, get_config_manager};
