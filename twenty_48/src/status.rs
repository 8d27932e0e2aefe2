use crate::{grid::Grid, line::merges};

/// Win condition of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Reaching a tile of this value wins.
    Target(u32),
    /// Play until stuck.
    Endless,
}

impl Mode {
    pub const STANDARD: Mode = Mode::Target(2048);

    pub fn target(self) -> Option<u32> {
        match self {
            Mode::Target(t) => Some(t),
            Mode::Endless => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::STANDARD
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

pub fn check_win(grid: &Grid, mode: Mode) -> bool {
    match mode.target() {
        Some(target) => grid.cells().any(|v| v != 0 && v == target),
        None => false,
    }
}

/// A grid is lost when it is full and no two orthogonal neighbours match.
pub fn check_lose(grid: &Grid) -> bool {
    if grid.has_empty() {
        return false;
    }
    let rows = grid.rows();
    let across = rows
        .iter()
        .any(|row| row.windows(2).any(|w| merges(w[0], w[1])));
    let down = rows
        .windows(2)
        .any(|pair| pair[0].iter().zip(&pair[1]).any(|(a, b)| merges(*a, *b)));
    !(across || down)
}

pub fn evaluate(grid: &Grid, mode: Mode) -> GameStatus {
    if check_win(grid, mode) {
        GameStatus::Won
    } else if check_lose(grid) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}
