mod snake;

pub use snake::SnakeGameUi;
