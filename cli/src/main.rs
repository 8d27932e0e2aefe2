mod input;
mod render;
mod screen;

use std::{
    fs::File,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Env, Target};
use log::info;
use twenty_48::{GameState, Mode};

use crate::{input::Action, screen::Screen};

#[derive(Parser, Debug)]
#[command(name = "twenty48", author, version, about = "Play 2048 in the terminal")]
struct Args {
    /// Whether reaching the target tile ends the game
    #[arg(long, value_enum, default_value = "standard")]
    mode: ModeArg,

    /// Tile that wins a standard game
    #[arg(long, default_value_t = 2048, value_parser = parse_target)]
    target: u32,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between the slide and the new tile, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 200)]
    spawn_delay_ms: u64,

    /// Skip the start screen
    #[arg(long)]
    no_intro: bool,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Win on reaching the target tile
    Standard,
    /// Play until no move is left
    Endless,
}

impl Args {
    fn mode(&self) -> Mode {
        match self.mode {
            ModeArg::Standard => Mode::Target(self.target),
            ModeArg::Endless => Mode::Endless,
        }
    }
}

fn parse_target(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|e| format!("{e}"))?;
    if n >= 4 && n.is_power_of_two() {
        Ok(n)
    } else {
        Err(format!("{n} is not a power of two of at least 4"))
    }
}

// the screen belongs to the game, so logs only ever go to a file
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn play(args: &Args) -> Result<()> {
    let mode = args.mode();
    let mut game = match args.seed {
        Some(seed) => GameState::new_from_seed(mode, seed),
        None => GameState::new_from_entropy(mode),
    };
    let delay = Duration::from_millis(args.spawn_delay_ms);
    info!("starting {mode:?}, seed {:?}", args.seed);

    let mut screen = Screen::enter().context("failed to set up the terminal")?;
    if !args.no_intro && !screen.intro()? {
        return Ok(());
    }

    'gameloop: loop {
        screen.draw(&game)?;

        match screen.next_action()? {
            Action::Move(dir) => {
                if game.do_move(dir) {
                    screen.draw(&game)?;
                    thread::sleep(delay);
                    game.spawn_tile();
                }
            }
            Action::Restart => {
                info!("restart, highest tile was {}", game.max());
                game.restart();
            }
            Action::Quit => break 'gameloop,
            Action::Confirm | Action::Redraw => {}
        }
    }

    info!("quit with highest tile {}", game.max());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    play(&args)
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["twenty48"]).unwrap();
        assert_eq!(args.mode(), Mode::STANDARD);
        assert_eq!(args.spawn_delay_ms, 200);
        assert!(args.seed.is_none());
        assert!(!args.no_intro);
    }

    #[test]
    fn endless_ignores_target() {
        let args =
            Args::try_parse_from(["twenty48", "--mode", "endless", "--target", "512"]).unwrap();
        assert_eq!(args.mode(), Mode::Endless);
    }

    #[test]
    fn custom_target() {
        let args = Args::try_parse_from(["twenty48", "--target", "256", "--seed", "7"]).unwrap();
        assert_eq!(args.mode(), Mode::Target(256));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn bad_targets_are_rejected() {
        assert!(parse_target("2").is_err());
        assert!(parse_target("1000").is_err());
        assert!(parse_target("abc").is_err());
        assert_eq!(parse_target("4096"), Ok(4096));
        assert!(Args::try_parse_from(["twenty48", "--target", "3"]).is_err());
    }
}
