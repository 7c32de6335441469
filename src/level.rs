use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos, MAX_SIZE};
use crate::map::{GoalMap, MapFormatter};
use crate::state::State;
use crate::vec2d::Vec2d;

/// A complete puzzle instance - static map plus initial state.
#[derive(Clone)]
pub struct Level {
    pub map: GoalMap,
    pub state: State,
}

impl Level {
    pub fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    /// Builds a level from two separate grids: a `height`x`width` layout
    /// grid (`#` wall, ` ` floor, `.` goal) and an items overlay of the same
    /// size (`@` player, `$` box, `.` extra goal, ` ` nothing). Fails fast
    /// on malformed input instead of searching.
    pub fn from_grids(
        width: usize,
        height: usize,
        layout: &[Vec<char>],
        items: &[Vec<char>],
    ) -> Result<Level, LoadError> {
        if width == 0 || height == 0 || layout.len() != height || items.len() != height {
            return Err(LoadError::Dimensions);
        }
        if width > MAX_SIZE || height > MAX_SIZE {
            return Err(LoadError::TooLarge);
        }

        let mut grid = Vec::with_capacity(height);
        let mut goals = Vec::new();
        let mut boxes = Vec::new();
        let mut player_pos = None;

        for r in 0..height {
            if layout[r].len() != width || items[r].len() != width {
                return Err(LoadError::Dimensions);
            }
            let mut row = Vec::with_capacity(width);
            for c in 0..width {
                let pos = Pos::new(r, c);
                let cell = match layout[r][c] {
                    '#' => MapCell::Wall,
                    ' ' => MapCell::Empty,
                    '.' => {
                        goals.push(pos);
                        MapCell::Goal
                    }
                    _ => return Err(LoadError::LayoutSymbol(r, c)),
                };
                let cell = match items[r][c] {
                    ' ' => cell,
                    '@' => {
                        if player_pos.is_some() {
                            return Err(LoadError::MultiplePlayers);
                        }
                        player_pos = Some(pos);
                        cell
                    }
                    '$' => {
                        boxes.push(pos);
                        cell
                    }
                    // goal marked only in the items overlay
                    '.' if cell != MapCell::Goal => {
                        goals.push(pos);
                        MapCell::Goal
                    }
                    '.' => cell,
                    _ => return Err(LoadError::ItemSymbol(r, c)),
                };
                row.push(cell);
            }
            grid.push(row);
        }

        let player_pos = player_pos.ok_or(LoadError::NoPlayer)?;
        if boxes.len() != goals.len() {
            return Err(LoadError::BoxesGoals);
        }

        Ok(Level::new(
            GoalMap::new(Vec2d::new(&grid), goals),
            State::new(player_pos, boxes),
        ))
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.map.format_with_state(&self.state)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}

/// Malformed loader input, reported before any search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    Dimensions,
    TooLarge,
    LayoutSymbol(usize, usize),
    ItemSymbol(usize, usize),
    MultiplePlayers,
    NoPlayer,
    BoxesGoals,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LoadError::Dimensions => write!(f, "Grid dimensions don't match width/height"),
            LoadError::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            LoadError::LayoutSymbol(r, c) => {
                write!(f, "Invalid layout symbol at pos: [{}, {}]", r, c)
            }
            LoadError::ItemSymbol(r, c) => write!(f, "Invalid item symbol at pos: [{}, {}]", r, c),
            LoadError::MultiplePlayers => write!(f, "More than one player"),
            LoadError::NoPlayer => write!(f, "No player"),
            LoadError::BoxesGoals => write!(f, "Different number of boxes and goals"),
        }
    }
}

impl Error for LoadError {}
