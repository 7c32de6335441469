pub(crate) mod a_star;
mod deadlocks;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::config::Limits;
use crate::data::DIRECTIONS;
use crate::level::Level;
use crate::map::GoalMap;
use crate::moves::{Move, Moves};
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::Solve;

use self::a_star::SearchNode;
pub use self::a_star::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    BoxesGoals,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::BoxesGoals => write!(f, "Different number of boxes and goals"),
        }
    }
}

impl Error for SolverErr {}

/// How a search run ended. An exhausted budget is reported separately from a
/// proven-unsolvable puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Moves),
    NoSolution,
    Aborted,
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
}

impl SolverOk {
    pub fn moves(&self) -> Option<&Moves> {
        match self.outcome {
            Outcome::Solved(ref moves) => Some(moves),
            _ => None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref moves) => writeln!(f, "Moves: {}", moves.move_cnt())?,
            Outcome::NoSolution => writeln!(f, "No solution")?,
            Outcome::Aborted => writeln!(f, "Aborted")?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, limits: Limits, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, limits, print_status)
    }
}

fn solve(level: &Level, limits: Limits, print_status: bool) -> Result<SolverOk, SolverErr> {
    // levels built through Level::from_grids are already validated,
    // parsed ones are not
    if level.state.boxes().len() != level.map.goals.len() {
        return Err(SolverErr::BoxesGoals);
    }

    debug!("Finding dead cells...");
    let dead_cells = deadlocks::find_dead_cells(&level.map);
    debug!("Dead cells:\n{}", dead_cells);

    let (outcome, stats) = search(&level.map, &dead_cells, &level.state, limits, print_status);
    Ok(SolverOk { outcome, stats })
}

/// Best-first search over states, one move per edge. Every discovered state
/// goes into the visited set when it is created, so each physical
/// configuration is expanded at most once.
fn search(
    map: &GoalMap,
    dead_cells: &Vec2d<bool>,
    initial_state: &State,
    limits: Limits,
    print_status: bool,
) -> (Outcome, Stats) {
    debug!("Search called");

    let mut stats = Stats::new();

    let arena = Arena::new();
    let mut to_visit = BinaryHeap::new();
    let mut visited: FnvHashSet<&State> = FnvHashSet::default();

    let h = heuristic(map, dead_cells, initial_state);
    let start: &SearchNode<'_> = arena.alloc(SearchNode::new(initial_state.clone(), None, 0, h));
    stats.add_created(start);
    visited.insert(&start.state);
    to_visit.push(Reverse(start));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if stats.add_unique_visited(cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            print!("{}", stats);
        }

        if cur_node.state.is_goal(map) {
            debug!("Solved, backtracking the path");
            return (Outcome::Solved(reconstruct_moves(cur_node)), stats);
        }

        if let Some(max) = limits.max_created {
            if stats.total_created() as u64 >= max {
                debug!("State budget exhausted, aborting");
                return (Outcome::Aborted, stats);
            }
        }

        for &dir in &DIRECTIONS {
            let neighbor_state = match cur_node.state.move_player(map, dir) {
                Some(state) => state,
                None => continue,
            };
            if visited.contains(&neighbor_state) {
                stats.add_reached_duplicate(cur_node.dist + 1);
                continue;
            }

            let h = heuristic(map, dead_cells, &neighbor_state);
            let next_node: &SearchNode<'_> = arena.alloc(SearchNode::new(
                neighbor_state,
                Some(cur_node),
                cur_node.dist + 1,
                h,
            ));
            stats.add_created(next_node);
            visited.insert(&next_node.state);
            to_visit.push(Reverse(next_node));
        }
    }

    (Outcome::NoSolution, stats)
}

/// Estimated moves remaining: for each box its distance to the nearest goal
/// plus the player's distance to it. A box on a dead cell makes the whole
/// state effectively unsolvable, so the estimate saturates at `i32::MAX`
/// (deprioritized, never expanded while anything better remains).
///
/// Not admissible - the player term double-counts across boxes - so paths
/// are not guaranteed move-optimal. Accepted trade-off for search depth.
fn heuristic(map: &GoalMap, dead_cells: &Vec2d<bool>, state: &State) -> i32 {
    let mut total = 0i32;
    for &box_pos in state.boxes() {
        if dead_cells[box_pos] {
            return i32::max_value();
        }

        let mut goal_dist = i32::max_value();
        for &goal in &map.goals {
            let dist = box_pos.dist(goal);
            if dist < goal_dist {
                goal_dist = dist;
            }
        }
        total = total
            .saturating_add(goal_dist)
            .saturating_add(state.player_pos.dist(box_pos));
    }
    total
}

/// Walks parent references from the goal node back to the root and derives
/// each move token from the player-position delta, then reverses the lot
/// into chronological order.
fn reconstruct_moves(goal_node: &SearchNode<'_>) -> Moves {
    let mut backwards = Vec::new();

    let mut node = goal_node;
    while let Some(prev) = node.prev {
        let dir = prev.state.player_pos.dir_to(node.state.player_pos);
        let is_push = prev.state.boxes() != node.state.boxes();
        backwards.push(Move::new(dir, is_push));
        node = prev;
    }

    let mut moves = Moves::default();
    for &mov in backwards.iter().rev() {
        moves.add(mov);
    }
    moves
}
