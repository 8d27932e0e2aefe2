use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::read,
    execute, queue,
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use twenty_48::GameState;

use crate::{
    input::{action, Action},
    render::{BoardView, IntroView},
};

/// Raw-mode alternate screen. The terminal is put back the way it was when
/// this is dropped, including on error paths.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut screen = Screen { out: io::stdout() };
        execute!(screen.out, EnterAlternateScreen, Hide)?;
        Ok(screen)
    }

    /// Block until the next key or resize that maps to an action.
    pub fn next_action(&self) -> io::Result<Action> {
        loop {
            if let Some(a) = action(&read()?) {
                return Ok(a);
            }
        }
    }

    pub fn draw(&mut self, game: &GameState) -> io::Result<()> {
        let (screen_width, _) = size()?;
        queue!(
            self.out,
            Clear(ClearType::All),
            BoardView {
                grid: game.grid(),
                status: game.status(),
                mode: game.mode(),
                screen_width,
            }
        )?;
        self.out.flush()
    }

    /// Show the start screen. Returns false if the player quit from it.
    pub fn intro(&mut self) -> io::Result<bool> {
        loop {
            let (screen_width, _) = size()?;
            queue!(self.out, Clear(ClearType::All), IntroView { screen_width })?;
            self.out.flush()?;
            match self.next_action()? {
                Action::Confirm => return Ok(true),
                Action::Quit => return Ok(false),
                _ => {}
            }
        }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
