use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

/// A record in the search tree. Nodes live in an arena for the whole search
/// so parent references stay valid until the winning path is backtracked.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    /// moves from the initial state
    pub(crate) dist: i32,
    /// estimated remaining moves
    pub(crate) h: i32,
    /// dist + h, saturating so deadlocked states sort last instead of wrapping
    pub(crate) prio: i32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: State, prev: Option<&'a SearchNode<'a>>, dist: i32, h: i32) -> Self {
        SearchNode {
            state,
            prev,
            dist,
            h,
            prio: dist.saturating_add(h),
        }
    }
}

impl<'a> PartialOrd for SearchNode<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Ord for SearchNode<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        // explicit tie-break: among equal priorities prefer the node that
        // looks closer to a goal
        self.prio.cmp(&other.prio).then(self.h.cmp(&other.h))
    }
}

impl<'a> PartialEq for SearchNode<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.prio == other.prio && self.h == other.h
    }
}

impl<'a> Eq for SearchNode<'a> {}

/// Per-depth counters of the states the search touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum()
    }

    pub fn created_per_depth(&self) -> &[i32] {
        &self.created_states
    }

    pub fn visited_per_depth(&self) -> &[i32] {
        &self.visited_states
    }

    pub fn duplicates_per_depth(&self) -> &[i32] {
        &self.duplicate_states
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.dist)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node.dist)
    }

    pub(crate) fn add_reached_duplicate(&mut self, dist: i32) -> bool {
        Self::add(&mut self.duplicate_states, dist)
    }

    fn add(counts: &mut Vec<i32>, dist: i32) -> bool {
        let mut new_depth = false;

        // while because some depths might be skipped
        while dist as usize >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[dist as usize] += 1;
        new_depth
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique states visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    fn node(dist: i32, h: i32) -> SearchNode<'static> {
        SearchNode::new(State::new(Pos::new(0, 0), vec![]), None, dist, h)
    }

    #[test]
    fn ordering_by_priority_then_heuristic() {
        assert!(node(1, 1) < node(1, 2));
        assert!(node(0, 5) > node(4, 0));
        // equal priority - the lower estimate wins
        assert!(node(3, 2) < node(2, 3));
        assert_eq!(node(2, 2), node(2, 2));
    }

    #[test]
    fn deadlocked_states_sort_last() {
        let dead = node(7, i32::max_value());
        assert_eq!(dead.prio, i32::max_value());
        assert!(node(1_000_000, 1_000_000) < dead);
    }

    #[test]
    fn depth_counters() {
        let mut stats = Stats::new();
        assert!(stats.add_created(&node(0, 0)));
        assert!(!stats.add_created(&node(0, 0)));
        assert!(stats.add_created(&node(2, 0)));
        assert_eq!(stats.created_per_depth(), &[2, 0, 1]);
        assert_eq!(stats.total_created(), 3);

        assert!(stats.add_reached_duplicate(1));
        assert_eq!(stats.total_reached_duplicates(), 1);
    }
}
