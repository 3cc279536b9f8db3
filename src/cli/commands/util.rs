//! Shared utilities for CLI commands.

use tictactoe::board::{Board, Player};
use tictactoe::game::engine::EngineConfig;
use tictactoe::game::game_loop::GameLoop;
use tictactoe::game::input_source::InputSource;
use tictactoe::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(starting_position: Board) -> EngineConfig {
    EngineConfig {
        starting_position,
        first_player: Player::X,
    }
}
