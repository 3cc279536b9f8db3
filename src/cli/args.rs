//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "A perfect-play tic-tac-toe engine implemented in Rust"
)]
pub enum TicTacToe {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches the full game tree for its moves. Your side will be chosen at random unless you specify it with `--player`. X always moves first."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself from the empty board. With perfect play on both sides the game always ends in a draw."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move for a position given with `--board` (required), e.g. `XX-OO----`. The side to move is inferred from the piece counts unless given with `--player`."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable at each depth up to `--depth` (default: 9) and report the time it took. `--strategy distinct` counts unique boards instead of game-tree nodes."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for TicTacToe {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
