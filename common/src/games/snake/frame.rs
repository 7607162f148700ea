use std::collections::HashSet;

use super::game::GamePhase;
use super::game_state::GameState;
use super::types::{CellRole, Coordinate};

/// What a renderer gets once per tick.
#[derive(Clone, Debug)]
pub struct Frame {
    pub previous: Option<GameState>,
    pub next: GameState,
    pub board_size: usize,
    pub phase: GamePhase,
    pub changed_cells: Vec<(Coordinate, CellRole)>,
}

impl Frame {
    pub fn initial(state: GameState, board_size: usize, phase: GamePhase) -> Self {
        let changed_cells = changed_cells(None, &state, board_size);
        Self {
            previous: None,
            next: state,
            board_size,
            phase,
            changed_cells,
        }
    }

    pub fn transition(
        previous: GameState,
        next: GameState,
        board_size: usize,
        phase: GamePhase,
    ) -> Self {
        let changed_cells = changed_cells(Some(&previous), &next, board_size);
        Self {
            previous: Some(previous),
            next,
            board_size,
            phase,
            changed_cells,
        }
    }

    pub fn length_changed(&self) -> bool {
        match &self.previous {
            Some(previous) => previous.snake_length() != self.next.snake_length(),
            None => true,
        }
    }
}

/// Cells whose role differs between `previous` and `next`, paired with the new role.
/// Without a previous state every non-background cell of `next` is reported.
pub fn changed_cells(
    previous: Option<&GameState>,
    next: &GameState,
    board_size: usize,
) -> Vec<(Coordinate, CellRole)> {
    let mut candidates: Vec<Coordinate> = Vec::new();
    let mut seen: HashSet<Coordinate> = HashSet::new();

    for state in previous.into_iter().chain(std::iter::once(next)) {
        let cells = std::iter::once(state.head())
            .chain(std::iter::once(state.candy()))
            .chain(state.tail().iter().copied());
        for cell in cells {
            if cell.is_within(board_size) && seen.insert(cell) {
                candidates.push(cell);
            }
        }
    }

    candidates
        .into_iter()
        .filter_map(|cell| {
            let before = previous.map_or(CellRole::Background, |state| state.cell_role(cell));
            let after = next.cell_role(cell);
            (before != after).then_some((cell, after))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::{Direction, SnakeSettings};

    fn c(column: i32, row: i32) -> Coordinate {
        Coordinate::new(column, row)
    }

    fn sorted(mut cells: Vec<(Coordinate, CellRole)>) -> Vec<(Coordinate, CellRole)> {
        cells.sort_by_key(|(cell, _)| (cell.row, cell.column));
        cells
    }

    #[test]
    fn test_initial_frame_reports_every_occupied_cell() {
        let state = GameState::from_parts(c(3, 3), vec![c(2, 3), c(1, 3)], c(5, 0), Direction::Right);
        let frame = Frame::initial(state, 8, GamePhase::Running);

        assert_eq!(
            sorted(frame.changed_cells.clone()),
            vec![
                (c(5, 0), CellRole::Candy),
                (c(1, 3), CellRole::Tail),
                (c(2, 3), CellRole::Tail),
                (c(3, 3), CellRole::Head),
            ]
        );
        assert!(frame.length_changed());
    }

    #[test]
    fn test_plain_move_changes_three_cells() {
        let mut rng = SessionRng::new(42);
        let state = GameState::from_parts(c(3, 3), vec![c(2, 3), c(1, 3)], c(5, 0), Direction::Right);
        let next = state.advance(None, &SnakeSettings::with_board_size(8), &mut rng);

        let frame = Frame::transition(state, next, 8, GamePhase::Running);
        assert_eq!(
            sorted(frame.changed_cells.clone()),
            vec![
                (c(1, 3), CellRole::Background),
                (c(3, 3), CellRole::Tail),
                (c(4, 3), CellRole::Head),
            ]
        );
        assert!(!frame.length_changed());
    }

    #[test]
    fn test_eating_reports_new_candy_and_length_change() {
        let mut rng = SessionRng::new(42);
        let state = GameState::from_parts(c(3, 3), vec![c(2, 3), c(1, 3)], c(4, 3), Direction::Right);
        let next = state.advance(None, &SnakeSettings::with_board_size(8), &mut rng);
        let new_candy = next.candy();

        let frame = Frame::transition(state, next, 8, GamePhase::Running);
        assert!(frame.length_changed());
        assert!(frame.changed_cells.contains(&(c(4, 3), CellRole::Head)));
        assert!(frame.changed_cells.contains(&(c(3, 3), CellRole::Tail)));
        assert!(frame.changed_cells.contains(&(new_candy, CellRole::Candy)));
        // The tail end stays put on the tick the snake grows.
        assert!(!frame.changed_cells.iter().any(|(cell, _)| *cell == c(1, 3)));
    }

    #[test]
    fn test_off_board_head_is_not_reported() {
        let mut rng = SessionRng::new(42);
        let state = GameState::from_parts(c(4, 2), vec![c(3, 2)], c(0, 0), Direction::Right);
        let next = state.advance(None, &SnakeSettings::with_board_size(5), &mut rng);

        let frame = Frame::transition(state, next, 5, GamePhase::GameOver);
        assert!(frame.changed_cells.iter().all(|(cell, _)| cell.is_within(5)));
    }
}
