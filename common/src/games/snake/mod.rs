mod direction_queue;
mod frame;
mod game;
mod game_state;
mod session;
mod settings;
mod types;

pub use direction_queue::DirectionQueue;
pub use frame::{Frame, changed_cells};
pub use game::{GamePhase, SnakeGame};
pub use game_state::GameState;
pub use session::{GameOverSummary, SessionCommand, SessionSummary, SnakeSession};
pub use settings::{
    DEFAULT_BOARD_SIZE, DEFAULT_CANDY_PLACEMENT_ATTEMPTS, DEFAULT_INITIAL_SNAKE_LENGTH,
    DEFAULT_TICK_INTERVAL, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SnakeSettings,
};
pub use types::{CellRole, Coordinate, Direction, GameEndReason};
