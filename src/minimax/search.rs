//! Exhaustive minimax search.
//!
//! # Algorithm
//!
//! The search walks the whole game tree depth-first. Terminal boards are scored
//! by `Outcome::terminal_score`, using the number of empty cells left as the
//! magnitude of a win so that faster wins and slower losses score better. X
//! keeps the candidate with the strictly greatest value, O the strictly
//! smallest; candidates are visited in ascending cell order, so the first move
//! reaching the extreme value wins ties. There is no pruning.
//!
//! # Caches
//!
//! Every successor board evaluated during a search is memoized together with
//! the side to move on it. There is one cache per side: a board reached by X's
//! move is stored in the O-to-move cache and vice versa. A cache hit skips the
//! whole subtree, since the parent only needs the value and not the move.
//! Caches live as long as the `Minimax` that owns them and are never evicted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::debug;

use super::cache::ValueCache;
use crate::board::{Board, Player};

/// Result of a search: the chosen cell (absent when the board is already
/// decided) and the value of the position under perfect play.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub index: Option<usize>,
    pub value: i32,
}

impl Move {
    fn terminal(value: i32) -> Self {
        Self { index: None, value }
    }
}

/// Snapshot of the search counters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cache_hits: usize,
    pub cache_stores: usize,
    pub x_to_move_cached: usize,
    pub o_to_move_cached: usize,
    pub last_search_duration: Option<Duration>,
}

/// Perfect-play search engine. Owns the two memoization caches, so separate
/// instances never share state; a single instance can be shared across
/// threads (e.g. behind an `Arc`) because every method takes `&self`.
#[derive(Default)]
pub struct Minimax {
    x_to_move: ValueCache,
    o_to_move: ValueCache,
    positions_searched: AtomicUsize,
    last_search_nanos: AtomicUsize,
}

impl Minimax {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the best move for `player` on `board` and the value of the
    /// position. On a board that already has an outcome the move index is
    /// `None` and the value is the terminal score.
    ///
    /// Panics if the board has no empty cell and yet no outcome, which cannot
    /// happen on a 3x3 board.
    pub fn minimax(&self, board: &Board, player: Player) -> Move {
        let start = Instant::now();
        let best_move = self.search(board, player);
        let elapsed = start.elapsed();
        self.last_search_nanos
            .store(elapsed.as_nanos() as usize, Ordering::Relaxed);

        debug!(
            "minimax for {}: {:?} in {:?} ({} positions searched)",
            player,
            best_move,
            elapsed,
            self.positions_searched.load(Ordering::Relaxed)
        );
        best_move
    }

    fn search(&self, board: &Board, player: Player) -> Move {
        self.positions_searched.fetch_add(1, Ordering::Relaxed);

        let moves = board.available_moves();

        if let Some(outcome) = board.evaluate_outcome() {
            return Move::terminal(outcome.terminal_score(moves.len()));
        }

        let mut best_index = *moves
            .first()
            .expect("a board without an outcome always has an empty cell");
        let mut best_value = if player.is_maximizing() {
            i32::MIN
        } else {
            i32::MAX
        };

        let next_player = player.opposite();
        let cache = self.cache_for(next_player);

        for &index in moves.iter() {
            let successor = board.apply_move(index, player);

            let value = match cache.probe(&successor) {
                Some(cached_value) => cached_value,
                None => {
                    let value = self.search(&successor, next_player).value;
                    cache.store(successor, value);
                    value
                }
            };

            let is_better = if player.is_maximizing() {
                value > best_value
            } else {
                value < best_value
            };

            if is_better {
                best_value = value;
                best_index = index;
            }
        }

        Move {
            index: Some(best_index),
            value: best_value,
        }
    }

    /// The cache holding values of boards on which `player` is to move.
    fn cache_for(&self, player: Player) -> &ValueCache {
        match player {
            Player::X => &self.x_to_move,
            Player::O => &self.o_to_move,
        }
    }

    pub fn stats(&self) -> SearchStats {
        let last_search_nanos = self.last_search_nanos.load(Ordering::Relaxed);
        SearchStats {
            positions_searched: self.positions_searched.load(Ordering::Relaxed),
            cache_hits: self.x_to_move.hits() + self.o_to_move.hits(),
            cache_stores: self.x_to_move.stores() + self.o_to_move.stores(),
            x_to_move_cached: self.x_to_move.len(),
            o_to_move_cached: self.o_to_move.len(),
            last_search_duration: if self.positions_searched.load(Ordering::Relaxed) > 0 {
                Some(Duration::from_nanos(last_search_nanos as u64))
            } else {
                None
            },
        }
    }

    /// Empties both caches and resets the counters.
    pub fn clear(&self) {
        self.x_to_move.clear();
        self.o_to_move.clear();
        self.positions_searched.store(0, Ordering::Relaxed);
        self.last_search_nanos.store(0, Ordering::Relaxed);
    }
}
