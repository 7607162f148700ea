use snake_common::games::snake::{SessionCommand, SnakeGame, SnakeSession};
use snake_common::log;
use std::thread::JoinHandle;
use tokio::sync::mpsc;

use crate::state::SharedState;

use super::LocalBroadcaster;

/// Runs the session on its own thread so the UI thread only paints.
pub fn spawn_snake_session(
    game: SnakeGame,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    shared_state: SharedState,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };

        let broadcaster = LocalBroadcaster::new(shared_state);
        let summary = runtime.block_on(SnakeSession::run(game, command_rx, broadcaster));
        log!(
            "Played {} games, best snake length {}",
            summary.games_started,
            summary.best_length
        );
    })
}
