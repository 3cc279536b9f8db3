//! Search tests.
//!
//! Coverage:
//! - Terminal scoring (wins, draws, the magnitude floor)
//! - Tactics (immediate wins, forced blocks, lost positions, single move left)
//! - Perfect self-play from the empty board
//! - Cache behavior (warm vs cold answers, isolation, clearing, sharing across threads)
//! - X/O symmetry of the returned move and value

use super::*;
use crate::board::Outcome;
use crate::board_position;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

/// Every board reachable from the empty board in at most `max_plies` moves
/// that is still in progress, paired with the side to move.
fn boards_in_progress(max_plies: usize) -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut frontier = vec![(Board::new(), Player::X)];
    let mut boards = Vec::new();

    for _ in 0..=max_plies {
        let mut next_frontier = Vec::new();
        for (board, player) in frontier {
            if board.evaluate_outcome().is_some() || !seen.insert(board) {
                continue;
            }
            for index in board.available_moves() {
                next_frontier.push((board.apply_move(index, player), player.opposite()));
            }
            boards.push((board, player));
        }
        frontier = next_frontier;
    }

    boards
}

#[test]
fn test_takes_immediate_win() {
    let searcher = Minimax::new();
    let board = board_position! {
        X X -
        O O -
        - - -
    };

    let best_move = searcher.minimax(&board, Player::X);

    assert_eq!(best_move, Move { index: Some(2), value: 4 });
}

#[test]
fn test_o_takes_immediate_win() {
    let searcher = Minimax::new();
    let board = board_position! {
        X X -
        O O -
        X - -
    };

    let best_move = searcher.minimax(&board, Player::O);

    assert_eq!(best_move, Move { index: Some(5), value: -3 });
}

#[test]
fn test_blocks_immediate_loss() {
    let searcher = Minimax::new();
    let board = board_position! {
        X - -
        O O -
        - - X
    };

    let best_move = searcher.minimax(&board, Player::X);

    assert_eq!(best_move, Move { index: Some(5), value: 0 });
}

#[test]
fn test_lost_position_still_returns_a_move() {
    let searcher = Minimax::new();
    // O threatens both 2 and 6; X has no winning line left
    let board = board_position! {
        O O -
        O X X
        - X -
    };

    let best_move = searcher.minimax(&board, Player::X);

    assert_eq!(best_move, Move { index: Some(2), value: -1 });
}

#[test]
fn test_single_empty_cell_is_played() {
    let searcher = Minimax::new();
    let board = board_position! {
        X O X
        O O X
        X X -
    };
    assert_eq!(board.evaluate_outcome(), None);

    assert_eq!(
        searcher.minimax(&board, Player::X),
        Move { index: Some(8), value: 1 }
    );
    assert_eq!(
        searcher.minimax(&board, Player::O),
        Move { index: Some(8), value: 0 }
    );
}

#[test]
fn test_terminal_boards_have_no_move() {
    let searcher = Minimax::new();

    let x_won = board_position! {
        X X X
        O O -
        - - -
    };
    assert_eq!(searcher.minimax(&x_won, Player::O), Move { index: None, value: 4 });
    assert_eq!(searcher.minimax(&x_won, Player::X), Move { index: None, value: 4 });

    let o_won = board_position! {
        O O O
        X X -
        X - -
    };
    assert_eq!(searcher.minimax(&o_won, Player::X), Move { index: None, value: -3 });

    let x_won_full = board_position! {
        X X X
        O O X
        X O O
    };
    assert_eq!(searcher.minimax(&x_won_full, Player::O), Move { index: None, value: 1 });

    let draw = board_position! {
        X O X
        X O O
        O X X
    };
    assert_eq!(searcher.minimax(&draw, Player::X), Move { index: None, value: 0 });
}

#[test]
fn test_empty_board_is_a_draw() {
    let searcher = Minimax::new();

    let best_move = searcher.minimax(&Board::new(), Player::X);

    assert_eq!(best_move.value, 0);
    // every opening move draws, so the first one is kept
    assert_eq!(best_move.index, Some(0));
}

#[test]
fn test_perfect_play_ends_in_draw() {
    let searcher = Minimax::new();
    let mut board = Board::new();
    let mut player = Player::X;

    while board.evaluate_outcome().is_none() {
        let best_move = searcher.minimax(&board, player);
        let index = best_move.index.expect("game in progress has a move");
        board = board.apply_move(index, player);
        player = player.opposite();
    }

    assert_eq!(board.evaluate_outcome(), Some(Outcome::Draw));
}

#[test]
fn test_perfect_play_with_shared_searcher_ends_in_draw() {
    let mut board = Board::new();
    let mut player = Player::X;

    while board.evaluate_outcome().is_none() {
        let index = minimax(&board, player).index.unwrap();
        board = board.apply_move(index, player);
        player = player.opposite();
    }

    assert_eq!(board.evaluate_outcome(), Some(Outcome::Draw));
}

#[test]
fn test_repeated_search_is_identical() {
    let searcher = Minimax::new();
    let board = board_position! {
        X - -
        - O -
        - - -
    };

    let cold = searcher.minimax(&board, Player::X);
    let warm = searcher.minimax(&board, Player::X);

    assert_eq!(cold, warm);
    assert!(searcher.stats().cache_hits > 0);
}

#[test]
fn test_warm_cache_matches_cold_cache() {
    let warm = Minimax::new();
    warm.minimax(&Board::new(), Player::X);
    warm.minimax(&Board::new(), Player::O);

    for (board, player) in boards_in_progress(3) {
        let cold = Minimax::new();
        assert_eq!(
            warm.minimax(&board, player),
            cold.minimax(&board, player),
            "warm and cold searches disagree on\n{}",
            board
        );
    }
}

#[test]
fn test_swapping_sides_negates_value() {
    let searcher = Minimax::new();

    for (board, player) in boards_in_progress(4) {
        let original = searcher.minimax(&board, player);
        let mirrored = searcher.minimax(&board.with_players_swapped(), player.opposite());

        assert_eq!(original.index, mirrored.index, "index differs on\n{}", board);
        assert_eq!(original.value, -mirrored.value, "value differs on\n{}", board);
    }
}

#[test]
fn test_best_move_never_loses_value() {
    let searcher = Minimax::new();

    for (board, player) in boards_in_progress(5) {
        let best_move = searcher.minimax(&board, player);
        let index = best_move.index.unwrap();
        let successor = board.apply_move(index, player);
        let follow_up = searcher.minimax(&successor, player.opposite());

        assert_eq!(best_move.value, follow_up.value, "on board\n{}", board);
    }
}

#[test]
fn test_new_searchers_do_not_share_caches() {
    let first = Minimax::new();
    let second = Minimax::new();

    first.minimax(&Board::new(), Player::X);

    let first_stats = first.stats();
    assert!(first_stats.positions_searched > 0);
    assert!(first_stats.x_to_move_cached > 0);
    assert!(first_stats.o_to_move_cached > 0);
    assert_eq!(second.stats(), SearchStats::default());
}

#[test]
fn test_clear_resets_caches_and_counters() {
    let searcher = Minimax::new();
    let board = Board::new().apply_move(4, Player::X);
    let before = searcher.minimax(&board, Player::O);

    searcher.clear();
    assert_eq!(searcher.stats(), SearchStats::default());

    assert_eq!(searcher.minimax(&board, Player::O), before);
}

#[test]
fn test_caches_store_each_successor_once() {
    let searcher = Minimax::new();
    searcher.minimax(&Board::new(), Player::X);

    let stats = searcher.stats();
    assert_eq!(
        stats.cache_stores,
        stats.x_to_move_cached + stats.o_to_move_cached
    );
    // every board reachable after the first move is stored exactly once
    assert_eq!(stats.cache_stores, 5477);
}

#[test]
fn test_shared_across_threads() {
    let searcher = Arc::new(Minimax::new());
    let expected = Minimax::new().minimax(&Board::new(), Player::X);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let searcher = Arc::clone(&searcher);
            thread::spawn(move || searcher.minimax(&Board::new(), Player::X))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
