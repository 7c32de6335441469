use crate::data::{Dir, MapCell, Pos};
use crate::map::GoalMap;

/// The dynamic part of a puzzle - player and boxes. The static map is shared
/// instead of being cloned into every state.
///
/// Boxes are kept sorted (row-major) so that two states representing the same
/// physical configuration compare and hash equal no matter in which order the
/// boxes were pushed around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub player_pos: Pos,
    boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort_unstable();
        State { player_pos, boxes }
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub(crate) fn box_at(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// One atomic player action: step into the adjacent cell, pushing at most
    /// one box. Returns the successor state or `None` if the move is blocked
    /// (out of bounds, wall, or the box's own destination is a wall/box).
    ///
    /// Never mutates `self` - rejected moves leave nothing to discard.
    pub fn move_player(&self, map: &GoalMap, dir: Dir) -> Option<State> {
        let dest = self.player_pos + dir;
        if !map.grid.contains(dest) || map.grid[dest] == MapCell::Wall {
            return None;
        }

        let mut boxes = self.boxes.clone();
        if let Ok(i) = boxes.binary_search(&dest) {
            let box_dest = dest + dir;
            if !map.grid.contains(box_dest)
                || map.grid[box_dest] == MapCell::Wall
                || self.box_at(box_dest)
            {
                return None;
            }
            boxes[i] = box_dest;
            boxes.sort_unstable();
        }

        Some(State {
            player_pos: dest,
            boxes,
        })
    }

    /// All boxes on goals - counted over positions, box order plays no role.
    pub fn is_goal(&self, map: &GoalMap) -> bool {
        self.boxes.iter().all(|&b| map.grid[b] == MapCell::Goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DIRECTIONS;
    use crate::level::Level;

    fn parse(level: &str) -> Level {
        level.parse().unwrap()
    }

    #[test]
    fn box_order_is_canonical() {
        let player = Pos::new(1, 1);
        let a = State::new(player, vec![Pos::new(2, 3), Pos::new(1, 2)]);
        let b = State::new(player, vec![Pos::new(1, 2), Pos::new(2, 3)]);
        assert_eq!(a, b);
        assert_eq!(a.boxes(), &[Pos::new(1, 2), Pos::new(2, 3)]);
    }

    #[test]
    fn step_and_blocked_moves() {
        let level = parse(
            r"
#####
#@$.#
#####
",
        );
        let state = &level.state;
        // walls on three sides
        assert_eq!(state.move_player(&level.map, Dir::Up), None);
        assert_eq!(state.move_player(&level.map, Dir::Down), None);
        assert_eq!(state.move_player(&level.map, Dir::Left), None);
        // push onto the goal
        let pushed = state.move_player(&level.map, Dir::Right).unwrap();
        assert_eq!(pushed.player_pos, Pos::new(1, 2));
        assert_eq!(pushed.boxes(), &[Pos::new(1, 3)]);
        assert!(pushed.is_goal(&level.map));
    }

    #[test]
    fn push_rejected_by_wall_and_box() {
        let level = parse(
            r"
######
#@$$.#
######
",
        );
        // box behind the box
        assert_eq!(level.state.move_player(&level.map, Dir::Right), None);

        let level = parse(
            r"
####
#@$#
#..#
####
",
        );
        // wall behind the box
        assert_eq!(level.state.move_player(&level.map, Dir::Right), None);
    }

    #[test]
    fn moves_preserve_box_count() {
        let level = parse(
            r"
######
#@$ .#
# $ .#
######
",
        );
        for &dir in &DIRECTIONS {
            if let Some(next) = level.state.move_player(&level.map, dir) {
                assert_eq!(next.boxes().len(), level.state.boxes().len());
                assert_eq!(next.player_pos.dist(level.state.player_pos), 1);
            }
        }
    }

    #[test]
    fn is_goal_ignores_order() {
        let level = parse(
            r"
######
#@* *#
######
",
        );
        // boxes discovered left to right, goals too - but check is positional
        assert!(level.state.is_goal(&level.map));
        let reordered = State::new(
            level.state.player_pos,
            vec![level.state.boxes()[1], level.state.boxes()[0]],
        );
        assert!(reordered.is_goal(&level.map));
    }

    #[test]
    fn no_boxes_is_trivially_goal() {
        let level = parse(
            r"
###
#@#
###
",
        );
        assert!(level.state.is_goal(&level.map));
    }
}
