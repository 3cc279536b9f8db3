use std::cmp::max;
use std::fmt;

use super::player::Player;

/// Every row, column and diagonal, in the order they are checked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Outcome {
    WinX,
    WinO,
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::WinX => Some(Player::X),
            Outcome::WinO => Some(Player::O),
            Outcome::Draw => None,
        }
    }

    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::WinX,
            Player::O => Outcome::WinO,
        }
    }

    /// Score of a terminal board. The number of empty cells left scales the
    /// magnitude so that quicker wins (and slower losses) are preferred; a win
    /// is never worth less than 1.
    pub fn terminal_score(&self, moves_count: usize) -> i32 {
        let magnitude = max(moves_count as i32, 1);
        match self {
            Outcome::WinX => magnitude,
            Outcome::WinO => -magnitude,
            Outcome::Draw => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Outcome::WinX => "X won!",
            Outcome::WinO => "O won...",
            Outcome::Draw => "It's a draw.",
        };
        write!(f, "{}", message)
    }
}
