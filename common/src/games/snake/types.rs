/// A cell on the board. Signed so that a head which has just left the board can still be
/// represented in the final snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub column: i32,
    pub row: i32,
}

impl Coordinate {
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub fn is_within(&self, board_size: usize) -> bool {
        let size = board_size as i32;
        (0..size).contains(&self.column) && (0..size).contains(&self.row)
    }

    pub fn moved(&self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Coordinate::new(self.column, self.row - 1),
            Direction::Down => Coordinate::new(self.column, self.row + 1),
            Direction::Left => Coordinate::new(self.column - 1, self.row),
            Direction::Right => Coordinate::new(self.column + 1, self.row),
        }
    }

    /// Row-major index into a `board_size * board_size` buffer, `None` when off the board.
    pub fn to_index(&self, board_size: usize) -> Option<usize> {
        if !self.is_within(board_size) {
            return None;
        }
        Some(self.row as usize * board_size + self.column as usize)
    }

    pub fn from_index(index: usize, board_size: usize) -> Self {
        Coordinate::new((index % board_size) as i32, (index / board_size) as i32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        *other == self.opposite()
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    WallCollision,
    SelfCollision,
    /// No free cell left for the candy. The player has won.
    BoardFilled,
}

impl GameEndReason {
    pub fn is_win(&self) -> bool {
        matches!(self, GameEndReason::BoardFilled)
    }
}

/// What a single cell shows. When roles overlap the head wins over the candy, and the candy
/// wins over the tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellRole {
    #[default]
    Background,
    Head,
    Tail,
    Candy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_follows_screen_axes() {
        let origin = Coordinate::new(3, 3);
        assert_eq!(origin.moved(Direction::Up), Coordinate::new(3, 2));
        assert_eq!(origin.moved(Direction::Down), Coordinate::new(3, 4));
        assert_eq!(origin.moved(Direction::Left), Coordinate::new(2, 3));
        assert_eq!(origin.moved(Direction::Right), Coordinate::new(4, 3));
    }

    #[test]
    fn test_is_within_rejects_edges_outside_board() {
        assert!(Coordinate::new(0, 0).is_within(5));
        assert!(Coordinate::new(4, 4).is_within(5));
        assert!(!Coordinate::new(5, 2).is_within(5));
        assert!(!Coordinate::new(-1, 2).is_within(5));
        assert!(!Coordinate::new(2, -1).is_within(5));
    }

    #[test]
    fn test_index_conversion_is_row_major() {
        let coordinate = Coordinate::new(2, 3);
        assert_eq!(coordinate.to_index(5), Some(17));
        assert_eq!(Coordinate::from_index(17, 5), coordinate);
        assert_eq!(Coordinate::new(5, 0).to_index(5), None);
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }
}
