use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::direction_queue::DirectionQueue;
use super::frame::Frame;
use super::game_state::GameState;
use super::settings::SnakeSettings;
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// Owns one game: the current snapshot, queued turns, RNG and phase.
pub struct SnakeGame {
    settings: SnakeSettings,
    state: GameState,
    queue: DirectionQueue,
    phase: GamePhase,
    rng: SessionRng,
}

impl SnakeGame {
    pub fn new(settings: SnakeSettings, mut rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let state = GameState::initialize(&settings, &mut rng);
        let phase = phase_for(&state);
        Ok(Self {
            settings,
            state,
            queue: DirectionQueue::new(),
            phase,
            rng,
        })
    }

    /// Throws the current game away and starts a new one. Invalid settings leave the current
    /// game untouched.
    pub fn restart(&mut self, settings: SnakeSettings) -> Result<(), String> {
        settings.validate()?;
        self.state = GameState::initialize(&settings, &mut self.rng);
        self.settings = settings;
        self.queue.clear();
        self.phase = phase_for(&self.state);
        log!("Game restarted on {}x{} board", self.settings.board_size, self.settings.board_size);
        Ok(())
    }

    /// Runs one tick. Nothing happens unless the game is running.
    pub fn advance(&mut self) -> Option<Frame> {
        if self.phase != GamePhase::Running {
            return None;
        }

        let pending = self.queue.dequeue();
        let next = self.state.advance(pending, &self.settings, &mut self.rng);
        let previous = std::mem::replace(&mut self.state, next);

        if let Some(reason) = self.state.end_reason() {
            self.phase = GamePhase::GameOver;
            log!(
                "Game over after {} ticks: {:?}, snake length {}",
                self.state.tick(),
                reason,
                self.state.snake_length()
            );
        }

        Some(Frame::transition(
            previous,
            self.state.clone(),
            self.settings.board_size,
            self.phase,
        ))
    }

    /// Queues a turn for a later tick. Only a running game takes input.
    pub fn enqueue_direction(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.queue.enqueue(direction, self.state.direction())
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Paused;
        log!("Game paused at tick {}", self.state.tick());
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Running;
        log!("Game resumed at tick {}", self.state.tick());
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::GameOver => false,
        }
    }

    pub fn initial_frame(&self) -> Frame {
        Frame::initial(self.state.clone(), self.settings.board_size, self.phase)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn queued_directions(&self) -> &DirectionQueue {
        &self.queue
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: GameState) {
        self.phase = phase_for(&state);
        self.state = state;
    }
}

fn phase_for(state: &GameState) -> GamePhase {
    if state.is_game_over() {
        GamePhase::GameOver
    } else {
        GamePhase::Running
    }
}
