//! chessapp console entry point.

use anyhow::{anyhow, Context};
use chessapp::console::{run_console_loop, Options, Session};
use chessapp::Game;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Draw pieces as FEN letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Hide rank and file labels
    #[arg(long)]
    no_coordinates: bool,

    /// Print `info string` traces for every command
    #[arg(long)]
    debug: bool,

    /// Start from this position instead of the initial one
    #[arg(short, long)]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let options = Options {
        glyphs: !args.ascii,
        coordinates: !args.no_coordinates,
        debug: args.debug,
    };

    let game = match &args.fen {
        Some(fen) => Game::from_fen(fen).map_err(|e| anyhow!("invalid FEN '{}': {}", fen, e))?,
        None => Game::new(),
    };

    let mut session = Session::with_game(game, options);
    run_console_loop(&mut session).context("console loop failed")?;
    Ok(())
}
