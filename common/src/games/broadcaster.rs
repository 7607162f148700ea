use std::future::Future;

use crate::games::snake::{Frame, GameOverSummary, GamePhase};

/// Where a session sends what the player should see.
pub trait FrameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_frame(&self, frame: Frame) -> impl Future<Output = ()> + Send;

    fn broadcast_phase(&self, phase: GamePhase) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
