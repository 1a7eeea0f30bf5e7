use crate::{Placement, Position};
use serde::{Deserialize, Serialize};

/// Square letter grid. `None` marks a cell no word or fill letter has
/// claimed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create a blank `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }

    /// Letter at `pos`, or `None` if blank or outside the grid
    pub fn get(&self, pos: Position) -> Option<char> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    pub fn is_blank(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i].is_none())
    }

    /// Write `letter` at `pos`. Positions outside the grid are ignored.
    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Some(letter);
        }
    }

    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.blank_count() == 0
    }

    /// Blank cells in row-major order
    pub fn blank_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| Position::new(i / self.size, i % self.size))
    }

    /// Iterate over rows, each a slice of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // chunks(0) panics, an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Read the letters along `cells`. Returns `None` if any cell is blank
    /// or off the grid.
    pub fn read_path(&self, cells: &[Position]) -> Option<String> {
        cells.iter().map(|&pos| self.get(pos)).collect()
    }

    /// Read the word a placement spells on this grid
    pub fn read_placement(&self, placement: &Placement) -> Option<String> {
        self.read_path(placement.cells())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.blank_count(), 16);
        assert!(!grid.is_full());
        assert!(grid.is_blank(Position::new(3, 3)));
        assert!(!grid.is_blank(Position::new(4, 0)));
        assert_eq!(grid.get(Position::new(0, 0)), None);
    }

    #[test]
    fn test_set_and_read_path() {
        let mut grid = Grid::new(3);
        let placement = Placement::trace(Position::new(0, 2), Direction::DownLeft, 3, 3).unwrap();
        for (pos, letter) in placement.cells().iter().zip("CAT".chars()) {
            grid.set(*pos, letter);
        }
        assert_eq!(grid.read_placement(&placement).as_deref(), Some("CAT"));
        assert_eq!(grid.blank_count(), 6);
        assert_eq!(grid.read_path(&[Position::new(0, 0)]), None);
    }

    #[test]
    fn test_blank_positions_row_major() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 1), 'X');
        let blanks: Vec<_> = grid.blank_positions().collect();
        assert_eq!(
            blanks,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 0), 'A');
        grid.set(Position::new(1, 1), 'B');
        assert_eq!(grid.to_string(), "A .\n. B\n");
    }
}
