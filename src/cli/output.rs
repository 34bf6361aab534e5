//! Output formatting for CLI sessions

use std::io::{self, Write};

use serde::Serialize;

use crate::tictactoe::{BoardState, Cell};

/// Write a section header
pub fn write_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(40))
}

/// Write a key-value pair
pub fn write_kv<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:12} {}", format!("{key}:"), value)
}

/// Write one serializable event as a single JSON line
pub fn write_json<W: Write, T: Serialize>(out: &mut W, event: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)?;
    Ok(())
}

/// Render the board as a grid; empty slots show their index
///
/// ```text
///  O | 1 | 2
/// ---+---+---
///  3 | X | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
pub fn render_board(board: &BoardState) -> String {
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, &cell)| match cell {
                    Cell::Empty => format!(" {} ", row * 3 + col),
                    marked => format!(" {} ", marked.to_char()),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
