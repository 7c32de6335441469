use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{MapCell, Pos};

/// A rectangular grid stored in a single flat vector.
#[derive(Clone, PartialEq, Eq)]
pub struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    /// A same-sized grid to track per-cell data during a computation.
    pub(crate) fn create_scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Vec2d<MapCell> {
    /// Rows of unequal length are padded with empty cells.
    pub(crate) fn new(grid: &[Vec<MapCell>]) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());

        let max_cols = grid.iter().map(|row| row.len()).max().unwrap();
        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(MapCell::Empty);
            }
        }
        Vec2d {
            data,
            rows: grid.len(),
            cols: max_cols,
        }
    }
}

impl Display for Vec2d<MapCell> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Vec2d<MapCell> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Debug for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[index.r as usize * self.cols + index.c as usize]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        &mut self.data[index.r as usize * self.cols + index.c as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_padded() {
        let grid = vec![
            vec![MapCell::Wall, MapCell::Wall, MapCell::Wall],
            vec![MapCell::Wall],
        ];
        let grid = Vec2d::new(&grid);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[Pos::new(1, 2)], MapCell::Empty);
        assert_eq!(grid.to_string(), "###\n#  \n");
    }

    #[test]
    fn bounds() {
        let grid = Vec2d::new(&vec![vec![MapCell::Empty; 4]; 3]);
        assert!(grid.contains(Pos::new(0, 0)));
        assert!(grid.contains(Pos::new(2, 3)));
        assert!(!grid.contains(Pos::new(3, 0)));
        assert!(!grid.contains(Pos::new(0, 4)));
        assert!(!grid.contains(Pos { r: -1, c: 0 }));
    }

    #[test]
    fn scratchpad_matches_size() {
        let grid = Vec2d::new(&vec![vec![MapCell::Empty; 4]; 3]);
        let mut scratch = grid.create_scratchpad(false);
        assert_eq!(scratch.rows(), 3);
        assert_eq!(scratch.cols(), 4);
        scratch[Pos::new(1, 1)] = true;
        assert_eq!(scratch.to_string(), "0000\n0100\n0000\n");
    }
}
