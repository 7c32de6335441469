use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a puzzle - walls, floors and goals. Built once when
/// loading, shared read-only by every state derived during the search.
#[derive(Clone)]
pub struct GoalMap {
    pub grid: Vec2d<MapCell>,
    pub goals: Vec<Pos>,
}

impl GoalMap {
    pub fn new(grid: Vec2d<MapCell>, goals: Vec<Pos>) -> Self {
        GoalMap { grid, goals }
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter { map: self, state: Some(state) }
    }

    fn write(&self, state: Option<&State>, f: &mut Formatter<'_>) -> fmt::Result {
        let mut contents = self.grid.create_scratchpad(Contents::Empty);
        if let Some(state) = state {
            for &b in state.boxes() {
                contents[b] = Contents::Box;
            }
            contents[state.player_pos] = Contents::Player;
        }

        for r in 0..self.grid.rows() {
            // don't print trailing padding cells so output matches the input level strings
            let mut last_used = 0;
            for c in 0..self.grid.cols() {
                let pos = Pos::new(r, c);
                if self.grid[pos] != MapCell::Empty || contents[pos] != Contents::Empty {
                    last_used = c;
                }
            }

            for c in 0..=last_used {
                let pos = Pos::new(r, c);
                Self::write_cell(self.grid[pos], contents[pos], f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Wall, Contents::Empty) => write!(f, "#"),
            (MapCell::Wall, _) => unreachable!(),
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Box) => write!(f, "$"),
            (MapCell::Empty, Contents::Player) => write!(f, "@"),
            (MapCell::Goal, Contents::Empty) => write!(f, "."),
            (MapCell::Goal, Contents::Box) => write!(f, "*"),
            (MapCell::Goal, Contents::Player) => write!(f, "+"),
        }
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write(None, f)
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Prints a map in XSB format with a state's boxes and player overlaid.
pub struct MapFormatter<'a> {
    map: &'a GoalMap,
    state: Option<&'a State>,
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.map.write(self.state, f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
