use std::collections::VecDeque;

use crate::data::{MapCell, Pos, DIRECTIONS};
use crate::map::GoalMap;
use crate::vec2d::Vec2d;

/// Marks every cell from which no sequence of pushes can ever bring a box to
/// a goal (simple/static deadlocks - a box on such a cell makes the whole
/// branch unsolvable regardless of the other boxes or the player).
///
/// Works by simulating pulls in reverse: BFS from every goal, pulling an
/// imaginary box one cell at a time over the cleared map. A pull needs the
/// box's destination and one more cell beyond it (standing room for the
/// player) to be free of walls. Everything the BFS never reaches is dead.
///
/// Runs once per puzzle instance; the result is shared read-only by the
/// whole search.
pub(crate) fn find_dead_cells(map: &GoalMap) -> Vec2d<bool> {
    let mut live = map.grid.create_scratchpad(false);
    let mut to_visit = VecDeque::new();

    for &goal in &map.goals {
        if !live[goal] {
            live[goal] = true;
            to_visit.push_back(goal);
        }
    }

    while let Some(cur) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            let box_dest = cur + dir;
            let player_dest = box_dest + dir;
            if !map.grid.contains(box_dest) || !map.grid.contains(player_dest) {
                continue;
            }
            if map.grid[box_dest] == MapCell::Wall || map.grid[player_dest] == MapCell::Wall {
                continue;
            }
            if !live[box_dest] {
                live[box_dest] = true;
                to_visit.push_back(box_dest);
            }
        }
    }

    let mut dead = map.grid.create_scratchpad(false);
    for r in 0..map.grid.rows() {
        for c in 0..map.grid.cols() {
            let pos = Pos::new(r, c);
            dead[pos] = !live[pos];
        }
    }
    dead
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn dead_cells() {
        let level: Level = r"
#####
##@##
##$##
#  .#
#####
"
        .parse()
        .unwrap();
        let dead = find_dead_cells(&level.map);
        let expected = "
11111
11111
11011
11001
11111
"
        .trim_start_matches('\n');
        assert_eq!(dead.to_string(), expected);
    }

    #[test]
    fn corner_is_dead() {
        let level: Level = r"
####
#. #
#  #
#$@#
####
"
        .parse()
        .unwrap();
        let dead = find_dead_cells(&level.map);
        // the box's corner can never be pushed out of
        assert!(dead[Pos::new(3, 1)]);
        // but the cell above it can reach the goal
        assert!(!dead[Pos::new(2, 1)]);
        assert!(!dead[Pos::new(1, 1)]);
    }

    #[test]
    fn deterministic() {
        let level: Level = r"
########
#@ $  .#
# $  . #
#   ## #
########
"
        .parse()
        .unwrap();
        assert_eq!(
            find_dead_cells(&level.map).to_string(),
            find_dead_cells(&level.map).to_string()
        );
    }
}
