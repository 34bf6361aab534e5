//! Tictactoe command - interactive two-player board

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::CommonConfig, output},
    tictactoe::{BoardState, Game, GameStatus, MoveReport},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play tic-tac-toe; O moves first")]
pub struct TicTacToeArgs {
    /// Do not redraw the board after every move
    #[arg(long)]
    pub quiet_board: bool,
}

/// Events emitted in `--json` mode, one per line
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Move(&'a MoveReport),
    Reset,
    Help { commands: &'static str },
    Board { board: &'a BoardState, status: GameStatus },
    Error { message: String },
}

const COMMANDS: &str = "0-8 place a marker, new/reset, board, quit";

enum Command {
    Place(usize),
    Reset,
    Board,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line {
        "new" | "reset" => Some(Command::Reset),
        "board" | "b" => Some(Command::Board),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        other => other.parse().ok().map(Command::Place),
    }
}

pub fn execute(args: TicTacToeArgs, common: &CommonConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout.lock(), &args, common)
}

/// Drive one game session until `quit` or end of input.
///
/// Bad input is reported and the session carries on; only I/O failures end it
/// early.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    args: &TicTacToeArgs,
    common: &CommonConfig,
) -> Result<()> {
    let mut game = Game::new();

    if !common.json {
        output::write_section(out, "Tic-Tac-Toe")?;
        writeln!(out, "Enter a slot (0-8), 'new', 'board' or 'quit'.")?;
        writeln!(out, "{}", output::render_board(game.board()))?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line.to_lowercase()) else {
            report_error(out, common, &format!("unrecognized command '{line}'"))?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                if common.json {
                    output::write_json(out, &Event::Help { commands: COMMANDS })?;
                } else {
                    writeln!(out, "Commands: {COMMANDS}")?;
                }
            }
            Command::Board => show_board(out, &game, common)?,
            Command::Reset => {
                game.reset();
                if common.json {
                    output::write_json(out, &Event::Reset)?;
                } else {
                    writeln!(out, "Board cleared. O to move.")?;
                    writeln!(out, "{}", output::render_board(game.board()))?;
                }
            }
            Command::Place(position) => match game.apply_move(position) {
                Ok(report) => show_move(out, &report, args, common)?,
                Err(e) => report_error(out, common, &e.to_string())?,
            },
        }
    }

    Ok(())
}

fn show_move<W: Write>(
    out: &mut W,
    report: &MoveReport,
    args: &TicTacToeArgs,
    common: &CommonConfig,
) -> Result<()> {
    if common.json {
        return output::write_json(out, &Event::Move(report));
    }

    writeln!(out, "{} -> {}", report.mv.player, report.mv.position)?;
    if !args.quiet_board {
        writeln!(out, "{}", output::render_board(&report.board))?;
    }
    match report.status {
        GameStatus::InProgress => writeln!(out, "{} to move", report.board.to_move)?,
        status => writeln!(out, "{status}. Type 'new' to play again.")?,
    }
    Ok(())
}

fn show_board<W: Write>(out: &mut W, game: &Game, common: &CommonConfig) -> Result<()> {
    if common.json {
        return output::write_json(
            out,
            &Event::Board {
                board: game.board(),
                status: game.status(),
            },
        );
    }

    writeln!(out, "{}", output::render_board(game.board()))?;
    match game.status() {
        GameStatus::InProgress => writeln!(out, "{} to move", game.to_move())?,
        status => writeln!(out, "{status}")?,
    }
    Ok(())
}

fn report_error<W: Write>(out: &mut W, common: &CommonConfig, message: &str) -> Result<()> {
    if common.json {
        output::write_json(
            out,
            &Event::Error {
                message: message.to_string(),
            },
        )
    } else {
        writeln!(out, "error: {message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command("4"), Some(Command::Place(4))));
        assert!(matches!(parse_command("12"), Some(Command::Place(12))));
        assert!(matches!(parse_command("new"), Some(Command::Reset)));
        assert!(matches!(parse_command("reset"), Some(Command::Reset)));
        assert!(matches!(parse_command("q"), Some(Command::Quit)));
        assert!(parse_command("-1").is_none());
        assert!(parse_command("middle").is_none());
    }
}
