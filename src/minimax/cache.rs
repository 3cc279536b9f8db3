//! Memoization cache for search values.

use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use rustc_hash::FxHasher;

use crate::board::Board;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Maps boards to the minimax value previously computed for them. Entries are
/// never evicted: the tic-tac-toe state space is small enough to keep every
/// board seen during the life of the cache.
///
/// Backed by a `DashMap`, so a cache can be probed and filled from several
/// threads at once through a shared reference.
pub struct ValueCache {
    table: DashMap<Board, i32, FxBuildHasher>,
    hits: AtomicUsize,
    stores: AtomicUsize,
}

impl Default for ValueCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueCache {
    pub fn new() -> Self {
        Self {
            table: DashMap::with_hasher(FxBuildHasher::default()),
            hits: AtomicUsize::new(0),
            stores: AtomicUsize::new(0),
        }
    }

    pub fn probe(&self, board: &Board) -> Option<i32> {
        let value = self.table.get(board).map(|entry| *entry);
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        value
    }

    pub fn store(&self, board: Board, value: i32) {
        self.table.insert(board, value);
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    pub fn clear(&self) {
        self.table.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.stores.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn stores(&self) -> usize {
        self.stores.load(Ordering::Relaxed)
    }
}
