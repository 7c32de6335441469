use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Maps larger than this are rejected when loading.
pub const MAX_SIZE: usize = 255;

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i16,
    pub c: i16,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i16,
            c: c as i16,
        }
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> i32 {
        (i32::from(self.r) - i32::from(other.r)).abs()
            + (i32::from(self.c) - i32::from(other.c)).abs()
    }

    /// Direction towards an adjacent position.
    pub(crate) fn dir_to(self, other: Pos) -> Dir {
        match (other.r - self.r, other.c - self.c) {
            (-1, 0) => Dir::Up,
            (1, 0) => Dir::Down,
            (0, -1) => Dir::Left,
            (0, 1) => Dir::Right,
            _ => unreachable!("{:?} and {:?} are not adjacent", self, other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn offset(self) -> (i16, i16) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // these exact four tokens are what playback consumers expect
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Wall,
    Empty,
    Goal,
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Wall => write!(f, "#"),
            MapCell::Empty => write!(f, " "),
            MapCell::Goal => write!(f, "."),
        }
    }
}

/// What occupies a cell in a given state - used when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}
