//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use tictactoe::board::Board;
use tictactoe::game::input_source::EngineInput;
use tictactoe::game::renderer::StatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let renderer = StatsRenderer {
            delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
        };
        run_game_loop(EngineInput, renderer, create_config(Board::new()));
    }
}
