//! parlor CLI - tic-tac-toe and stone-paper-scissor in the terminal
//!
//! Each game reads one command per line from stdin:
//! - `tictactoe`: two players share the board, O moves first
//! - `rps`: play against a uniformly random computer opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use parlor::cli::{commands, config::CommonConfig, logging};

#[derive(Parser)]
#[command(name = "parlor")]
#[command(version, about = "Two small terminal games", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every move and round to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print one JSON object per event instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play tic-tac-toe on a shared board
    #[command(name = "tictactoe", alias = "ttt")]
    TicTacToe(commands::tictactoe::TicTacToeArgs),

    /// Play stone-paper-scissor against the computer
    Rps(commands::rps::RpsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig::load_or_default(cli.config.as_deref())?.with_overrides(
        None,
        cli.verbose,
        cli.json,
    );
    logging::init(common.verbose)?;

    match cli.command {
        Commands::TicTacToe(args) => commands::tictactoe::execute(args, &common),
        Commands::Rps(args) => commands::rps::execute(args, &common),
    }
}
