use log::trace;

use crate::{
    grid::Grid,
    line::{can_reduce, reduce_line},
    Direction,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    pub changed: bool,
}

/// How a grid is turned so that a move becomes a leftward slide. Applying the
/// same orientation a second time turns it back.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Orientation {
    transpose: bool,
    reverse: bool,
}

impl Orientation {
    fn of(direction: Direction) -> Self {
        let (transpose, reverse) = match direction {
            Direction::Left => (false, false),
            Direction::Right => (false, true),
            Direction::Up => (true, false),
            Direction::Down => (true, true),
        };
        Self { transpose, reverse }
    }

    fn enter(self, grid: &Grid) -> Grid {
        let grid = if self.transpose {
            grid.transpose()
        } else {
            grid.clone()
        };
        if self.reverse {
            grid.reverse_rows()
        } else {
            grid
        }
    }

    fn leave(self, grid: Grid) -> Grid {
        let grid = if self.reverse {
            grid.reverse_rows()
        } else {
            grid
        };
        if self.transpose {
            grid.transpose()
        } else {
            grid
        }
    }
}

fn slide_left(grid: &Grid) -> MoveResult {
    let mut changed = false;
    let grid = grid.map_rows(|row| {
        let (out, row_changed) = reduce_line(row);
        changed |= row_changed;
        out
    });
    MoveResult { grid, changed }
}

/// Slide every tile on `grid` toward `direction`, merging equal pairs. The
/// input is left untouched.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let orientation = Orientation::of(direction);
    let MoveResult { grid: slid, changed } = slide_left(&orientation.enter(grid));
    trace!("{direction:?} changed={changed}");
    MoveResult {
        grid: orientation.leave(slid),
        changed,
    }
}

/// Whether `apply_move` would change the grid, without building the result.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    let oriented = Orientation::of(direction).enter(grid);
    oriented.rows().iter().any(|row| can_reduce(row))
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: &[&[u32]]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    //  |  2  |  2  |     |  4  |
    //  |     |  4  |     |  4  |
    //  |  2  |     |     |     |
    //  |  2  |  8  |  8  |  8  |
    fn sample() -> Grid {
        grid(&[&[2, 2, 0, 4], &[0, 4, 0, 4], &[2, 0, 0, 0], &[2, 8, 8, 8]])
    }

    #[test]
    fn left() {
        let r = apply_move(&sample(), Direction::Left);
        assert!(r.changed);
        assert_eq!(
            r.grid,
            grid(&[&[4, 4, 0, 0], &[8, 0, 0, 0], &[2, 0, 0, 0], &[2, 16, 8, 0]])
        );
    }

    #[test]
    fn right() {
        let r = apply_move(&sample(), Direction::Right);
        assert!(r.changed);
        assert_eq!(
            r.grid,
            grid(&[&[0, 0, 4, 4], &[0, 0, 0, 8], &[0, 0, 0, 2], &[0, 2, 8, 16]])
        );
    }

    #[test]
    fn up() {
        let r = apply_move(&sample(), Direction::Up);
        assert!(r.changed);
        assert_eq!(
            r.grid,
            grid(&[&[4, 2, 8, 8], &[2, 4, 0, 8], &[0, 8, 0, 0], &[0, 0, 0, 0]])
        );
    }

    #[test]
    fn down() {
        let r = apply_move(&sample(), Direction::Down);
        assert!(r.changed);
        assert_eq!(
            r.grid,
            grid(&[&[0, 0, 0, 0], &[0, 2, 0, 0], &[2, 4, 0, 8], &[4, 8, 8, 8]])
        );
    }

    #[test]
    fn blocked_direction_is_unchanged() {
        let g = grid(&[&[2, 4, 0, 0], &[8, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
        let r = apply_move(&g, Direction::Left);
        assert!(!r.changed);
        assert_eq!(r.grid, g);
        assert!(!can_move(&g, Direction::Left));
        assert!(!can_move(&g, Direction::Up));
        assert!(can_move(&g, Direction::Right));
        assert!(can_move(&g, Direction::Down));
    }

    #[test]
    fn non_square_grid() {
        let g = grid(&[&[2, 0, 2], &[2, 4, 0]]);
        assert_eq!(apply_move(&g, Direction::Up).grid, grid(&[&[4, 4, 2], &[0, 0, 0]]));
        assert_eq!(apply_move(&g, Direction::Right).grid, grid(&[&[0, 0, 4], &[0, 2, 4]]));
    }

    #[test]
    fn opposite_move_does_not_undo() {
        let g = grid(&[&[2, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
        let there = apply_move(&g, Direction::Left).grid;
        let back = apply_move(&there, Direction::Right).grid;
        assert_eq!(back, grid(&[&[0, 0, 0, 4], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]));
        assert_ne!(back, g);
    }

    #[test]
    fn largest_tile_does_not_overflow() {
        let big = crate::grid::MAX_TILE;
        let g = grid(&[&[big / 2, big / 2], &[big, big]]);
        let r = apply_move(&g, Direction::Left);
        assert!(r.changed);
        assert_eq!(r.grid, grid(&[&[big, 0], &[big, big]]));
        assert_eq!(r.grid.sum(), g.sum());
        assert!(Grid::from_rows(r.grid.into_rows()).is_ok());

        let up = apply_move(&g, Direction::Up);
        assert!(!up.changed);
        assert_eq!(up.grid, g);
    }

    fn arb_cell() -> impl Strategy<Value = u32> {
        prop_oneof![Just(0u32), (1u32..8).prop_map(|e| 1 << e)]
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(arb_cell(), cols), rows)
                .prop_map(|rows| Grid::from_rows(rows).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_up_is_transposed_left(g in arb_grid()) {
            let up = apply_move(&g, Direction::Up);
            let left = apply_move(&g.transpose(), Direction::Left);
            prop_assert_eq!(up.grid, left.grid.transpose());
            prop_assert_eq!(up.changed, left.changed);
        }

        #[test]
        fn prop_down_is_transposed_right(g in arb_grid()) {
            let down = apply_move(&g, Direction::Down);
            let right = apply_move(&g.transpose(), Direction::Right);
            prop_assert_eq!(down.grid, right.grid.transpose());
        }

        #[test]
        fn prop_right_is_mirrored_left(g in arb_grid()) {
            let right = apply_move(&g, Direction::Right);
            let left = apply_move(&g.reverse_rows(), Direction::Left);
            prop_assert_eq!(right.grid, left.grid.reverse_rows());
        }

        #[test]
        fn prop_moves_conserve_sum(g in arb_grid()) {
            for d in Direction::ALL {
                let r = apply_move(&g, d);
                prop_assert_eq!(r.grid.sum(), g.sum());
                prop_assert_eq!(r.changed, r.grid != g);
                prop_assert_eq!(r.changed, can_move(&g, d));
            }
        }
    }
}
