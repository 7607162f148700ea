use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

pub const MIN_PIXEL_SIZE: u32 = 8;
pub const MAX_PIXEL_SIZE: u32 = 64;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Side of one board cell in points.
    pub pixel_size: u32,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE).contains(&self.pixel_size) {
            return Err(format!(
                "pixel_size must be between {} and {}",
                MIN_PIXEL_SIZE, MAX_PIXEL_SIZE
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { pixel_size: 30 }
    }
}
