pub mod grid;
pub mod line;
pub mod moves;
pub mod spawn;
pub mod status;

use std::fmt::{self, Display};

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

pub use grid::{Grid, GridError, MAX_TILE};
pub use line::reduce_line;
pub use moves::{apply_move, can_move, MoveResult};
pub use spawn::spawn_tiles;
pub use status::{check_lose, check_win, evaluate, GameStatus, Mode};

pub const ROWS: usize = 4;
pub const COLS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One game in progress: the grid, the win condition and the random source
/// for spawned tiles.
///
/// A turn is split in two so a frontend can show the slid grid before the new
/// tile appears: [`GameState::do_move`] then [`GameState::spawn_tile`].
/// [`GameState::play`] does both.
#[derive(Clone)]
pub struct GameState {
    grid: Grid,
    mode: Mode,
    rng: StdRng,
}

impl GameState {
    pub fn new_from_seed(mode: Mode, seed: u64) -> Self {
        Self::new(mode, StdRng::seed_from_u64(seed))
    }

    pub fn new_from_entropy(mode: Mode) -> Self {
        Self::new(mode, StdRng::from_os_rng())
    }

    fn new(mode: Mode, rng: StdRng) -> Self {
        let mut s = GameState {
            grid: Grid::new(ROWS, COLS),
            mode,
            rng,
        };
        s.seed_grid();
        s
    }

    /// Start over on an empty grid with two fresh tiles. The random stream
    /// continues, so a restarted seeded game differs from the first one.
    pub fn restart(&mut self) {
        self.grid = Grid::new(self.grid.row_count(), self.grid.col_count());
        self.seed_grid();
        debug!("restarted\n{}", self.grid);
    }

    fn seed_grid(&mut self) {
        spawn_tiles(&mut self.grid, &mut self.rng, 2, false);
    }

    #[cfg(test)]
    pub(crate) fn from_grid(grid: Grid, mode: Mode, seed: u64) -> Self {
        Self {
            grid,
            mode,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.grid, self.mode)
    }

    pub fn max(&self) -> u32 {
        self.grid.max_tile()
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        !self.status().is_over() && can_move(&self.grid, direction)
    }

    /// Slide the grid. Returns false, leaving everything as it was, when the
    /// game is already over or nothing would move.
    pub fn do_move(&mut self, direction: Direction) -> bool {
        if self.status().is_over() {
            return false;
        }
        let MoveResult { grid, changed } = apply_move(&self.grid, direction);
        if changed {
            self.grid = grid;
            debug!("moved {direction:?}\n{}", self.grid);
        }
        changed
    }

    /// Drop one new tile on the grid and report the resulting status, or
    /// `None` when the grid had no empty cell and nothing was placed.
    pub fn spawn_tile(&mut self) -> Option<GameStatus> {
        if !spawn_tiles(&mut self.grid, &mut self.rng, 1, true) {
            return None;
        }
        let status = self.status();
        if status.is_over() {
            info!("game over: {status:?}, highest tile {}", self.max());
        }
        Some(status)
    }

    /// A full turn: slide, and spawn a tile if anything moved. A slide that
    /// changes the grid always leaves an empty cell behind.
    pub fn play(&mut self, direction: Direction) -> Option<GameStatus> {
        if !self.do_move(direction) {
            return None;
        }
        self.spawn_tile()
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
