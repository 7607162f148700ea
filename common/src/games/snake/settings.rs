use std::time::Duration;

use crate::config::Validate;

pub const DEFAULT_BOARD_SIZE: usize = 18;
pub const DEFAULT_INITIAL_SNAKE_LENGTH: usize = 3;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(120);
pub const DEFAULT_CANDY_PLACEMENT_ATTEMPTS: u32 = 1000;

pub const MIN_BOARD_SIZE: usize = 7;
pub const MAX_BOARD_SIZE: usize = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSettings {
    pub board_size: usize,
    pub initial_snake_length: usize,
    pub tick_interval: Duration,
    /// Random draws tried before the candy search falls back to scanning the free cells.
    pub candy_placement_attempts: u32,
}

impl SnakeSettings {
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH,
            tick_interval: DEFAULT_TICK_INTERVAL,
            candy_placement_attempts: DEFAULT_CANDY_PLACEMENT_ATTEMPTS,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(format!(
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if !(2..=10).contains(&self.initial_snake_length) {
            return Err("Initial snake length must be between 2 and 10".to_string());
        }
        // The head is inset by the snake length from every edge, so something has to be left
        // in the middle.
        if self.board_size <= 2 * self.initial_snake_length {
            return Err(format!(
                "Board size {} is too small for an initial snake length of {}",
                self.board_size, self.initial_snake_length
            ));
        }
        let tick_ms = self.tick_interval.as_millis();
        if !(20..=2000).contains(&tick_ms) {
            return Err("Tick interval must be between 20ms and 2000ms".to_string());
        }
        if self.candy_placement_attempts == 0 {
            return Err("Candy placement attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
