use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::games::FrameBroadcaster;
use crate::log;
use super::game::{GamePhase, SnakeGame};
use super::game_state::GameState;
use super::settings::SnakeSettings;
use super::types::{Direction, GameEndReason};

#[derive(Clone, Debug)]
pub enum SessionCommand {
    Turn(Direction),
    Pause,
    Resume,
    TogglePause,
    Restart(SnakeSettings),
    Shutdown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub reason: GameEndReason,
    pub snake_length: usize,
    pub ticks: u64,
}

impl GameOverSummary {
    fn from_state(state: &GameState) -> Option<Self> {
        state.end_reason().map(|reason| Self {
            reason,
            snake_length: state.snake_length(),
            ticks: state.tick(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub games_started: u32,
    pub games_finished: u32,
    pub total_ticks: u64,
    pub best_length: usize,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives `game` until `Shutdown` arrives or every command sender is gone.
    ///
    /// The tick timer is only armed while the game is running, and the next tick is scheduled
    /// once the previous frame has been handed to the broadcaster.
    pub async fn run(
        mut game: SnakeGame,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl FrameBroadcaster,
    ) -> SessionSummary {
        let mut summary = SessionSummary {
            games_started: 1,
            ..SessionSummary::default()
        };

        log!("Session started with seed {}", game.seed());
        broadcaster.broadcast_frame(game.initial_frame()).await;
        let mut next_tick = Instant::now() + game.settings().tick_interval;

        loop {
            let running = game.phase() == GamePhase::Running;

            tokio::select! {
                _ = sleep_until(next_tick), if running => {
                    if let Some(frame) = game.advance() {
                        let finished = frame.phase == GamePhase::GameOver;
                        summary.total_ticks += 1;
                        broadcaster.broadcast_frame(frame).await;

                        if finished && let Some(game_over) = GameOverSummary::from_state(game.state()) {
                            summary.games_finished += 1;
                            summary.best_length = summary.best_length.max(game_over.snake_length);
                            broadcaster.broadcast_game_over(game_over).await;
                        }
                    }
                    next_tick = Instant::now() + game.settings().tick_interval;
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };

                    match command {
                        SessionCommand::Turn(direction) => {
                            game.enqueue_direction(direction);
                        }
                        SessionCommand::Pause => {
                            if game.pause() {
                                broadcaster.broadcast_phase(game.phase()).await;
                            }
                        }
                        SessionCommand::Resume => {
                            if game.resume() {
                                next_tick = Instant::now() + game.settings().tick_interval;
                                broadcaster.broadcast_phase(game.phase()).await;
                            }
                        }
                        SessionCommand::TogglePause => {
                            if game.toggle_pause() {
                                next_tick = Instant::now() + game.settings().tick_interval;
                                broadcaster.broadcast_phase(game.phase()).await;
                            }
                        }
                        SessionCommand::Restart(settings) => match game.restart(settings) {
                            Ok(()) => {
                                summary.games_started += 1;
                                next_tick = Instant::now() + game.settings().tick_interval;
                                broadcaster.broadcast_frame(game.initial_frame()).await;
                            }
                            Err(e) => {
                                log!("Restart rejected: {}", e);
                            }
                        },
                        SessionCommand::Shutdown => {
                            break;
                        }
                    }
                }
            }
        }

        summary.best_length = summary.best_length.max(game.state().snake_length());
        log!(
            "Session finished: {} games started, {} ticks",
            summary.games_started,
            summary.total_ticks
        );
        summary
    }
}
