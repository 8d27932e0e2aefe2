use log::trace;
use rand::Rng;
use rand_distr::Distribution;

use crate::grid::Grid;

/// Value of a freshly spawned tile: 2, or 4 one time in ten when fours are
/// allowed.
#[derive(Debug, Copy, Clone)]
pub struct SpawnValue {
    pub allow_four: bool,
}

impl Distribution<u32> for SpawnValue {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.allow_four && rng.random_ratio(1, 10) {
            4
        } else {
            2
        }
    }
}

/// Place `count` new tiles on distinct, uniformly chosen empty cells.
///
/// When fewer than `count` cells are empty nothing is placed and `false` is
/// returned.
pub fn spawn_tiles<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    count: usize,
    allow_four: bool,
) -> bool {
    let mut open = grid.empty_cells();
    if open.len() < count {
        return false;
    }

    let value = SpawnValue { allow_four };
    for _ in 0..count {
        let (row, col) = open.swap_remove(rng.random_range(0..open.len()));
        let tile = value.sample(rng);
        trace!("spawned {tile} at ({row}, {col})");
        grid.set(row, col, tile);
    }
    true
}
