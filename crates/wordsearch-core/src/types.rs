use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `count` cells along `direction`, returning `None` if the result
    /// leaves the `size` x `size` grid.
    pub fn offset(self, direction: Direction, count: usize, size: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row as isize + dr * count as isize;
        let col = self.col as isize + dc * count as isize;
        let size = size as isize;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a word runs in, as a unit step over (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
    Left,
    Up,
    UpRight,
    UpLeft,
}

impl Direction {
    /// All directions, in the order used when drawing one at random
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Left,
        Direction::Up,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Row and column step for this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::DownRight => write!(f, "down-right"),
            Direction::DownLeft => write!(f, "down-left"),
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
            Direction::UpRight => write!(f, "up-right"),
            Direction::UpLeft => write!(f, "up-left"),
        }
    }
}

/// The cells a placed word occupies, one per letter, in reading order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub start: Position,
    pub direction: Direction,
    pub cells: Vec<Position>,
}

impl Placement {
    /// Walk `len` cells from `start`. Returns `None` if any cell would fall
    /// outside the grid.
    pub fn trace(start: Position, direction: Direction, len: usize, size: usize) -> Option<Self> {
        let cells = (0..len)
            .map(|i| start.offset(direction, i, size))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            start,
            direction,
            cells,
        })
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Last cell of the path
    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Check that the path is contiguous and collinear along `direction`
    pub fn is_straight(&self) -> bool {
        let (dr, dc) = self.direction.delta();
        self.cells.first() == Some(&self.start)
            && self.cells.windows(2).all(|pair| {
                pair[1].row as isize - pair[0].row as isize == dr
                    && pair[1].col as isize - pair[0].col as isize == dc
            })
    }
}
