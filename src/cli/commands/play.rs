//! Play command - play a game against the computer.

use log::info;
use structopt::StructOpt;
use tictactoe::board::{Board, Player};
use tictactoe::game::input_source::ConditionalInput;
use tictactoe::game::renderer::ConditionalRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "p", long = "player", default_value = "random")]
    pub player: Player,
}

impl Command for PlayArgs {
    fn execute(self) {
        info!("human plays {}", self.player);
        println!("You are playing {}. Type `quit` to exit.\n", self.player);

        run_game_loop(
            ConditionalInput {
                human_player: self.player,
            },
            ConditionalRenderer {
                human_player: self.player,
            },
            create_config(Board::new()),
        );
    }
}
