//! Perfect-play search for tic-tac-toe.

mod cache;
mod search;

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;

use crate::board::{Board, Player};

pub use cache::ValueCache;
pub use search::{Minimax, Move, SearchStats};

/// Searcher backing the free `minimax` function. Its caches live for the rest
/// of the process.
static SHARED_MINIMAX: Lazy<Minimax> = Lazy::new(Minimax::new);

/// Searches `board` for `player` using the process-wide caches.
///
/// Prefer an owned `Minimax` when cache isolation matters (tests, independent
/// games); this entry point is for callers that just want an answer.
pub fn minimax(board: &Board, player: Player) -> Move {
    SHARED_MINIMAX.minimax(board, player)
}
