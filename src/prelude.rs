//! Common types re-exported for convenience.

pub use crate::board::{Board, Cell, Outcome, Player};
pub use crate::minimax::{minimax, Minimax, Move};
