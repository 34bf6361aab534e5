//! Winning line analysis for Tic-Tac-Toe

use serde::{Deserialize, Serialize};

use super::{Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// Checked in this order; the first completed line decides the reported
/// winner when a single move closes two lines at once.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [0, 4, 8],
    [1, 4, 7],
    [2, 5, 8],
    [2, 4, 6],
    [3, 4, 5],
    [6, 7, 8],
];

/// A completed line and the player who owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub player: Player,
    pub line: [usize; 3],
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Scan the table in order and return the first completed line.
    pub fn find_winner(cells: &[Cell; 9]) -> Option<WinningLine> {
        WINNING_LINES.iter().find_map(|&line| {
            Self::line_owner(cells, &line).map(|player| WinningLine { player, line })
        })
    }

    /// Owner of a line when all three cells are filled with the same marker.
    ///
    /// Empty cells are rejected before markers are compared, so three empty
    /// cells never count as a line.
    fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
        let [a, b, c] = [cells[line[0]], cells[line[1]], cells[line[2]]];
        if a == Cell::Empty || b == Cell::Empty || c == Cell::Empty {
            return None;
        }
        if a == b && b == c { a.to_player() } else { None }
    }
}
