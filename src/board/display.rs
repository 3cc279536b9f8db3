use super::{Board, CELL_COUNT};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells().chunks(3).enumerate() {
            let line: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if (row + 1) * 3 < CELL_COUNT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Builds a `Board` from a 3x3 picture, top row first:
///
/// ```ignore
/// let board = board_position! {
///     X X -
///     O O -
///     - - -
/// };
/// ```
#[macro_export]
macro_rules! board_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string; the parser drops whitespace.
        let cells = stringify!($($cell)*);
        match cells.parse::<$crate::board::Board>() {
            Ok(board) => board,
            Err(error) => panic!("Invalid board position `{}`: {}", cells, error),
        }
    }};
}
