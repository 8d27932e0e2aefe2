use std::fmt::{self, Display};

use crossterm::{
    cursor::MoveTo,
    style::{Color, Stylize},
    Command,
};
use twenty_48::{GameStatus, Grid, Mode};

const CELL_WIDTH: usize = 7;

/// Columns taken by a board `cols` tiles wide, borders included.
pub fn board_width(cols: usize) -> usize {
    (CELL_WIDTH + 1) * cols + 1
}

/// Left edge that centres `width` columns on a screen `screen` columns wide.
pub fn centre(screen: u16, width: usize) -> u16 {
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    screen.saturating_sub(width) / 2
}

pub fn tile_color(value: u32) -> Color {
    let (r, g, b) = match value {
        0 => return Color::White,
        2 => (238, 228, 218),
        4 => (238, 225, 201),
        8 => (243, 178, 122),
        16 => (246, 150, 100),
        32 => (247, 124, 95),
        64 => (247, 95, 59),
        128 => (237, 208, 115),
        256 => (236, 203, 96),
        512 => (236, 200, 80),
        1024 => (236, 196, 65),
        2048 => (235, 193, 45),
        4096 => (239, 102, 109),
        8192 => (237, 77, 89),
        16384 => (225, 67, 56),
        32768 => (114, 180, 214),
        _ => (92, 160, 223),
    };
    Color::Rgb { r, g, b }
}

fn styled(tile: u32) -> impl Display {
    let text = match tile {
        0 => String::new(),
        t => t.to_string(),
    };
    format!(" {text: ^5} ").with(tile_color(tile)).bold()
}

fn line(f: &mut impl fmt::Write, x: u16, y: &mut u16, text: impl Display) -> fmt::Result {
    MoveTo(x, *y).write_ansi(f)?;
    *y += 1;
    write!(f, "{text}")
}

/// The board, a win/lose banner and a footer, centred on the screen.
pub struct BoardView<'a> {
    pub grid: &'a Grid,
    pub status: GameStatus,
    pub mode: Mode,
    pub screen_width: u16,
}

impl Command for BoardView<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let cols = self.grid.col_count();
        let width = board_width(cols);
        let x = centre(self.screen_width, width);
        let border = "-".repeat(width);
        let padding = format!("{}|", "|       ".repeat(cols));
        let mut y = 1;

        line(f, x, &mut y, &border)?;
        for row in self.grid.rows() {
            line(f, x, &mut y, &padding)?;
            MoveTo(x, y).write_ansi(f)?;
            y += 1;
            for &tile in row {
                write!(f, "|{}", styled(tile))?;
            }
            f.write_char('|')?;
            line(f, x, &mut y, &padding)?;
            line(f, x, &mut y, &border)?;
        }
        y += 1;

        let banner = match self.status {
            GameStatus::Won => format!("{:^width$}", "You win!").with(Color::Green).bold(),
            GameStatus::Lost => format!("{:^width$}", "Game over").with(Color::Red).bold(),
            GameStatus::InProgress => format!("{:^width$}", "").stylize(),
        };
        line(f, x, &mut y, banner)?;

        let goal = match self.mode.target() {
            Some(t) => format!("highest {}   goal {t}", self.grid.max_tile()),
            None => format!("highest {}   endless", self.grid.max_tile()),
        };
        line(f, x, &mut y, format_args!("{goal:^width$}"))?;
        let help = if self.status.is_over() {
            "r restart   q quit"
        } else {
            "wasd/arrows move   r restart   q quit"
        };
        line(f, x, &mut y, format_args!("{help:^width$}"))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "the board needs an ANSI terminal",
        ))
    }
}

const INTRO: [&str; 5] = [
    "2048 Game",
    "Slide with the arrow keys or w, a, s and d.",
    "Press q to quit.",
    "Press r to restart.",
    "Press enter to start.",
];

pub struct IntroView {
    pub screen_width: u16,
}

impl Command for IntroView {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let width = usize::from(self.screen_width);
        let mut y = 1;
        for text in INTRO {
            line(f, 0, &mut y, format!("{text:^width$}").bold())?;
        }
        Ok(())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "the intro needs an ANSI terminal",
        ))
    }
}
