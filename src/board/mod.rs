pub mod cell;
pub mod error;
pub mod outcome;
pub mod player;

mod display;


use std::str::FromStr;

use smallvec::SmallVec;

pub use cell::Cell;
pub use error::BoardError;
pub use outcome::{Outcome, WINNING_LINES};
pub use player::Player;

pub const CELL_COUNT: usize = 9;

/// Cell indices of the legal moves on a board, in ascending order.
pub type AvailableMoves = SmallVec<[usize; CELL_COUNT]>;

/// A 3x3 tic-tac-toe grid stored row-major: indices 0-2 are the top row,
/// 3-5 the middle row and 6-8 the bottom row.
///
/// Boards are small `Copy` values. Applying a move returns a new board and
/// leaves the original untouched, so a search can branch freely from any
/// ancestor position. Equality and hashing are structural, which lets boards
/// key the search caches directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn available_moves(&self) -> AvailableMoves {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Returns a copy of this board with `player` placed on `index`.
    ///
    /// Panics if `index` is out of range or already occupied; callers that take
    /// untrusted input should use `try_apply_move` instead.
    pub fn apply_move(&self, index: usize, player: Player) -> Board {
        assert!(
            self.cells[index].is_empty(),
            "cannot play on occupied cell {}",
            index
        );
        let mut next = *self;
        next.cells[index] = Cell::from(player);
        next
    }

    pub fn try_apply_move(&self, index: usize, player: Player) -> Result<Board, BoardError> {
        match self.cells.get(index) {
            None => Err(BoardError::IndexOutOfRange { index }),
            Some(cell) if !cell.is_empty() => Err(BoardError::CellOccupied { index }),
            Some(_) => Ok(self.apply_move(index, player)),
        }
    }

    /// Scans the winning lines in order and reports the first completed one.
    /// A full board without a completed line is a draw; anything else is
    /// still in progress.
    pub fn evaluate_outcome(&self) -> Option<Outcome> {
        for [a, b, c] in WINNING_LINES.iter().copied() {
            let cell = self.cells[a];
            if cell == self.cells[b] && cell == self.cells[c] {
                if let Some(player) = cell.player() {
                    return Some(Outcome::win_for(player));
                }
            }
        }

        if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Exchanges every X for an O and vice versa.
    pub fn with_players_swapped(&self) -> Board {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut() {
            *cell = cell.swapped();
        }
        swapped
    }

    /// Infers the side to move from the piece counts, assuming X moved first.
    pub fn next_player(&self) -> Player {
        let x_count = self.cells.iter().filter(|&&cell| cell == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&cell| cell == Cell::O).count();
        if x_count > o_count {
            Player::O
        } else {
            Player::X
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell characters (`X`, `O`, or `-`/`.`/`_` for empty).
    /// Whitespace and `/` or `|` row separators are ignored, so the output of
    /// `Display` parses back into the same board.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(BoardError::InvalidCellCount { count: chars.len() });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, &c) in cells.iter_mut().zip(chars.iter()) {
            *cell = Cell::from_char(c)
                .ok_or(BoardError::InvalidCellCharacter { invalid_character: c })?;
        }

        Ok(Board::from_cells(cells))
    }
}
