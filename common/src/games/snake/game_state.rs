use std::collections::HashSet;

use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSettings;
use super::types::{CellRole, Coordinate, Direction, GameEndReason};

/// One tick worth of game. Snapshots are never mutated: `advance` derives the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    head: Coordinate,
    tail: Vec<Coordinate>,
    candy: Coordinate,
    direction: Direction,
    snake_length: usize,
    end_reason: Option<GameEndReason>,
    tick: u64,
}

impl GameState {
    /// Fresh game. Expects validated settings.
    pub fn initialize(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        debug_assert!(settings.validate().is_ok(), "invalid snake settings: {:?}", settings);
        let inset = settings.initial_snake_length as i32;
        let size = settings.board_size as i32;
        let upper = (size - inset).max(inset + 1);

        let head = Coordinate::new(rng.random_range(inset..upper), rng.random_range(inset..upper));
        let direction = Direction::Right;
        let tail: Vec<Coordinate> = (1..inset)
            .map(|k| Coordinate::new(head.column - k, head.row))
            .collect();

        let mut state = Self {
            head,
            tail,
            candy: head,
            direction,
            snake_length: settings.initial_snake_length,
            end_reason: None,
            tick: 0,
        };

        match place_candy(state.head, &state.tail, settings, rng) {
            Some(candy) => state.candy = candy,
            None => state.end_reason = Some(GameEndReason::BoardFilled),
        }

        log!(
            "New game on {}x{} board: head at ({}, {}), candy at ({}, {})",
            settings.board_size,
            settings.board_size,
            state.head.column,
            state.head.row,
            state.candy.column,
            state.candy.row
        );
        state
    }

    /// Next snapshot after moving one cell in `pending` (or the current direction).
    /// A finished game is returned unchanged.
    pub fn advance(
        &self,
        pending: Option<Direction>,
        settings: &SnakeSettings,
        rng: &mut SessionRng,
    ) -> GameState {
        if self.is_game_over() {
            return self.clone();
        }

        let direction = pending.unwrap_or(self.direction);
        let head = self.head.moved(direction);
        let grew = head == self.candy;
        let snake_length = if grew {
            self.snake_length + 1
        } else {
            self.snake_length
        };

        let mut tail = Vec::with_capacity(self.tail.len() + 1);
        tail.push(self.head);
        tail.extend_from_slice(&self.tail);
        let vacated = if grew { None } else { tail.pop() };

        let mut end_reason = if !head.is_within(settings.board_size) {
            Some(GameEndReason::WallCollision)
        } else if tail.contains(&head) || vacated == Some(head) {
            Some(GameEndReason::SelfCollision)
        } else {
            None
        };

        let mut candy = self.candy;
        if grew && end_reason.is_none() {
            log!(
                "Candy eaten at ({}, {}), snake length {}",
                head.column,
                head.row,
                snake_length
            );
            match place_candy(head, &tail, settings, rng) {
                Some(next_candy) => candy = next_candy,
                None => end_reason = Some(GameEndReason::BoardFilled),
            }
        }

        GameState {
            head,
            tail,
            candy,
            direction,
            snake_length,
            end_reason,
            tick: self.tick + 1,
        }
    }

    pub fn head(&self) -> Coordinate {
        self.head
    }

    pub fn tail(&self) -> &[Coordinate] {
        &self.tail
    }

    pub fn candy(&self) -> Coordinate {
        self.candy
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake_length(&self) -> usize {
        self.snake_length
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn is_game_over(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn cell_role(&self, coordinate: Coordinate) -> CellRole {
        if coordinate == self.head {
            CellRole::Head
        } else if coordinate == self.candy {
            CellRole::Candy
        } else if self.tail.contains(&coordinate) {
            CellRole::Tail
        } else {
            CellRole::Background
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        head: Coordinate,
        tail: Vec<Coordinate>,
        candy: Coordinate,
        direction: Direction,
    ) -> Self {
        let snake_length = tail.len() + 1;
        Self {
            head,
            tail,
            candy,
            direction,
            snake_length,
            end_reason: None,
            tick: 0,
        }
    }
}

/// Picks a free cell for the candy: a bounded number of uniform draws, then a uniform pick
/// among the remaining free cells. `None` means the snake covers the whole board.
fn place_candy(
    head: Coordinate,
    tail: &[Coordinate],
    settings: &SnakeSettings,
    rng: &mut SessionRng,
) -> Option<Coordinate> {
    let size = settings.board_size as i32;
    let occupied: HashSet<Coordinate> = tail.iter().copied().chain(std::iter::once(head)).collect();

    for _ in 0..settings.candy_placement_attempts {
        let candidate = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Coordinate> = (0..settings.cell_count())
        .map(|index| Coordinate::from_index(index, settings.board_size))
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if free.is_empty() {
        log!("No free cell left for candy, board is full");
        return None;
    }

    log!(
        "Candy placement fell back to scanning, {} free cells left",
        free.len()
    );
    Some(free[rng.random_range(0..free.len())])
}
