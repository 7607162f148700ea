use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use snake_common::games::snake::{CellRole, Coordinate, Frame, GameOverSummary, GamePhase};
use std::sync::{Arc, Mutex, MutexGuard};

pub const EVENT_LOG_SIZE: usize = 8;

/// The board as the renderer last painted it.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub board_size: usize,
    pub cells: Vec<CellRole>,
    pub tail_length: usize,
    pub phase: GamePhase,
    pub game_over: Option<GameOverSummary>,
    pub tick: u64,
}

impl BoardView {
    pub fn empty() -> Self {
        Self {
            board_size: 0,
            cells: Vec::new(),
            tail_length: 0,
            phase: GamePhase::Running,
            game_over: None,
            tick: 0,
        }
    }

    pub fn role_at(&self, index: usize) -> CellRole {
        self.cells.get(index).copied().unwrap_or_default()
    }

    /// Repaints only the cells the frame reports as changed. Once the game is over the board
    /// stays as it was on the last playable tick.
    pub fn apply_frame(&mut self, frame: &Frame) {
        if frame.previous.is_none() {
            self.board_size = frame.board_size;
            self.cells = vec![CellRole::Background; frame.board_size * frame.board_size];
            self.game_over = None;
        }

        self.phase = frame.phase;
        self.tick = frame.next.tick();
        if frame.phase == GamePhase::GameOver {
            return;
        }

        for (coordinate, role) in &frame.changed_cells {
            self.set_role(*coordinate, *role);
        }

        if frame.length_changed() {
            self.tail_length = frame.next.snake_length().saturating_sub(1);
        }
    }

    fn set_role(&mut self, coordinate: Coordinate, role: CellRole) {
        if let Some(index) = coordinate.to_index(self.board_size)
            && let Some(cell) = self.cells.get_mut(index)
        {
            *cell = role;
        }
    }
}

#[derive(Clone)]
pub struct SharedState {
    view: Arc<Mutex<BoardView>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            view: Arc::new(Mutex::new(BoardView::empty())),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn apply_frame(&self, frame: &Frame) {
        lock(&self.view).apply_frame(frame);
        self.request_repaint();
    }

    pub fn set_phase(&self, phase: GamePhase) {
        lock(&self.view).phase = phase;
        self.request_repaint();
    }

    pub fn set_game_over(&self, summary: GameOverSummary) {
        lock(&self.view).game_over = Some(summary);
        self.request_repaint();
    }

    pub fn get_view(&self) -> BoardView {
        lock(&self.view).clone()
    }

    pub fn add_event(&self, event: String) {
        lock(&self.event_log).enqueue(event);
    }

    pub fn get_events(&self) -> Vec<String> {
        lock(&self.event_log).iter().cloned().collect()
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
