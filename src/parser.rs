use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos, MAX_SIZE};
use crate::level::Level;
use crate::map::GoalMap;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    InvalidCell(usize, usize),
    TooLarge,
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::InvalidCell(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_xsb(s)
    }
}

/// Parses (a subset of) the format described
/// [here](http://www.sokobano.de/wiki/index.php?title=Level_format).
fn parse_xsb(level: &str) -> Result<Level, ParserErr> {
    // trim so levels are easy to specify using raw strings
    let level = level.trim_matches('\n').trim_end();

    let mut grid = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        if r > MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            if c > MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(r, c);

            let cell = match cur_char {
                '#' => MapCell::Wall,
                '@' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    MapCell::Empty
                }
                '+' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                '$' => {
                    boxes.push(pos);
                    MapCell::Empty
                }
                '*' => {
                    boxes.push(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                '.' => {
                    goals.push(pos);
                    MapCell::Goal
                }
                ' ' | '-' | '_' => MapCell::Empty,
                _ => return Err(ParserErr::InvalidCell(r, c)),
            };
            row.push(cell);
        }
        grid.push(row);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    Ok(Level::new(
        GoalMap::new(Vec2d::new(&grid), goals),
        State::new(player_pos, boxes),
    ))
}
