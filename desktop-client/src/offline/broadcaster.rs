use snake_common::games::FrameBroadcaster;
use snake_common::games::snake::{Frame, GameEndReason, GameOverSummary, GamePhase};

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl FrameBroadcaster for LocalBroadcaster {
    async fn broadcast_frame(&self, frame: Frame) {
        if frame.previous.is_none() {
            self.shared_state
                .add_event(format!("New game on a {0}x{0} board", frame.board_size));
        } else if frame.length_changed() && frame.phase != GamePhase::GameOver {
            self.shared_state.add_event(format!(
                "Candy eaten, tail length {}",
                frame.next.tail().len()
            ));
        }
        self.shared_state.apply_frame(&frame);
    }

    async fn broadcast_phase(&self, phase: GamePhase) {
        match phase {
            GamePhase::Paused => self.shared_state.add_event("Paused".to_string()),
            GamePhase::Running => self.shared_state.add_event("Resumed".to_string()),
            GamePhase::GameOver => {}
        }
        self.shared_state.set_phase(phase);
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        let reason = match summary.reason {
            GameEndReason::WallCollision => "hit the wall",
            GameEndReason::SelfCollision => "bit its own tail",
            GameEndReason::BoardFilled => "filled the whole board",
        };
        self.shared_state.add_event(format!(
            "Snake {} after {} ticks, length {}",
            reason, summary.ticks, summary.snake_length
        ));
        self.shared_state.set_game_over(summary);
    }
}
