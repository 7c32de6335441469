// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod level;
pub mod moves;
pub mod solver;

mod data;
mod map;
mod parser;
mod state;
mod vec2d;

use std::error::Error;
use std::fs;
use std::path::Path;

pub use crate::data::{Dir, MapCell, Pos, DIRECTIONS, MAX_SIZE};
pub use crate::map::{GoalMap, MapFormatter};
pub use crate::parser::ParserErr;
pub use crate::state::State;
pub use crate::vec2d::Vec2d;

use crate::config::Limits;
use crate::level::Level;
use crate::solver::{Outcome, SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<T: AsRef<Path> + ?Sized> LoadLevel for T {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, limits: Limits, print_status: bool) -> Result<SolverOk, SolverErr>;
}

/// The whole core as one call: grids from the loader in, move tokens for the
/// playback layer out. `None` means the puzzle has no solution (or the
/// budget in `limits` ran out, when one is set).
pub fn solve_puzzle(
    width: usize,
    height: usize,
    layout: &[Vec<char>],
    items: &[Vec<char>],
    limits: Limits,
) -> Result<Option<String>, Box<dyn Error>> {
    let level = Level::from_grids(width, height, layout, items)?;
    let solver_ok = level.solve(limits, false)?;
    match solver_ok.outcome {
        Outcome::Solved(moves) => Ok(Some(moves.to_string())),
        Outcome::NoSolution | Outcome::Aborted => Ok(None),
    }
}
