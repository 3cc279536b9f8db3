//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use tictactoe::board::{Board, Player};
use tictactoe::minimax::Minimax;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(long = "board")]
    pub board: Board,
    #[structopt(short = "p", long = "player")]
    pub player: Option<Player>,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let player = self.player.unwrap_or_else(|| self.board.next_player());
        let best_move = Minimax::new().minimax(&self.board, player);

        match best_move.index {
            Some(index) => println!("{} {}", index, best_move.value),
            None => match self.board.evaluate_outcome() {
                Some(outcome) => println!("{} ({})", outcome, best_move.value),
                None => eprintln!("There are no valid moves in the given position."),
            },
        }
    }
}
