use std::str::FromStr;
use std::time::{Duration, SystemTime};

use rustc_hash::FxHashSet;

use crate::board::{Board, Outcome, Player};

#[derive(Debug)]
pub enum CountPositionsStrategy {
    All,
    Distinct,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "distinct" => Ok(CountPositionsStrategy::Distinct),
            _ => Err("invalid strategy; options are: all, distinct"),
        }
    }
}

/// Tally of every complete game playable from a position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GameCounts {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl GameCounts {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WinX => self.x_wins += 1,
            Outcome::WinO => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Number of game-tree nodes exactly `depth` plies after the empty board.
/// Finished games are not extended.
pub fn count_positions(depth: u8) -> usize {
    count_positions_from(&Board::new(), Player::X, depth)
}

fn count_positions_from(board: &Board, player: Player, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    if board.evaluate_outcome().is_some() {
        return 0;
    }

    board
        .available_moves()
        .iter()
        .map(|&index| {
            count_positions_from(&board.apply_move(index, player), player.opposite(), depth - 1)
        })
        .sum()
}

/// Number of distinct boards reachable in exactly `depth` plies.
pub fn count_distinct_positions(depth: u8) -> usize {
    let mut frontier = FxHashSet::default();
    frontier.insert(Board::new());
    let mut player = Player::X;

    for _ in 0..depth {
        let mut next_frontier = FxHashSet::default();
        for board in frontier.iter() {
            if board.evaluate_outcome().is_some() {
                continue;
            }
            for index in board.available_moves() {
                next_frontier.insert(board.apply_move(index, player));
            }
        }
        frontier = next_frontier;
        player = player.opposite();
    }

    frontier.len()
}

/// Plays out every possible game from the empty board.
pub fn count_games() -> GameCounts {
    let mut counts = GameCounts::default();
    count_games_from(&Board::new(), Player::X, &mut counts);
    counts
}

fn count_games_from(board: &Board, player: Player, counts: &mut GameCounts) {
    if let Some(outcome) = board.evaluate_outcome() {
        counts.record(outcome);
        return;
    }

    for index in board.available_moves() {
        count_games_from(&board.apply_move(index, player), player.opposite(), counts);
    }
}

pub fn run_count_positions(depth: u8, strategy: CountPositionsStrategy) {
    let depths = 0..=depth;

    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in depths {
        let starting_time = SystemTime::now();
        let count = match strategy {
            CountPositionsStrategy::All => count_positions(depth),
            CountPositionsStrategy::Distinct => count_distinct_positions(depth),
        };
        let duration = SystemTime::now()
            .duration_since(starting_time)
            .unwrap_or_default();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, duration: {:?}",
            depth, count, duration
        );
    }

    println!(
        "total positions: {}, total duration: {:?}",
        total_positions, total_duration
    );

    if let CountPositionsStrategy::All = strategy {
        let games = count_games();
        println!(
            "complete games: {} (X wins: {}, O wins: {}, draws: {})",
            games.total(),
            games.x_wins,
            games.o_wins,
            games.draws
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_positions_per_depth() {
        let expected = [
            1, 9, 72, 504, 3024, 15120, 54720, 148176, 200448, 127872,
        ];
        for (depth, &count) in expected.iter().enumerate() {
            assert_eq!(count_positions(depth as u8), count, "depth {}", depth);
        }
        assert_eq!(count_positions(10), 0);
    }

    #[test]
    fn test_count_distinct_positions_per_depth() {
        let expected = [1, 9, 72, 252, 756, 1260, 1520, 1140, 390, 78];
        for (depth, &count) in expected.iter().enumerate() {
            assert_eq!(count_distinct_positions(depth as u8), count, "depth {}", depth);
        }
        let total: usize = (0..=9).map(count_distinct_positions).sum();
        assert_eq!(total, 5478);
    }

    #[test]
    fn test_count_games() {
        let counts = count_games();
        assert_eq!(counts.total(), 255168);
        assert_eq!(counts.x_wins, 131184);
        assert_eq!(counts.o_wins, 77904);
        assert_eq!(counts.draws, 46080);
    }

    #[test]
    fn test_parse_strategy() {
        assert!(matches!(
            "all".parse::<CountPositionsStrategy>(),
            Ok(CountPositionsStrategy::All)
        ));
        assert!(matches!(
            "distinct".parse::<CountPositionsStrategy>(),
            Ok(CountPositionsStrategy::Distinct)
        ));
        assert!("alpha-beta".parse::<CountPositionsStrategy>().is_err());
    }
}
