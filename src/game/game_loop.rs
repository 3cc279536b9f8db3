use log::warn;

use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::{InputError, MoveInput};

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            input_source,
            renderer,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Plays turns until the game ends or the user exits.
    pub fn run(&mut self) {
        loop {
            let current_turn = self.engine.turn();
            self.renderer.render(&self.engine, current_turn);

            if let Some(outcome) = self.engine.check_game_over() {
                println!("{}", outcome);
                break;
            }

            let result = match self.input_source.get_move(current_turn) {
                Ok(Some(MoveInput::Cell(index))) => self.engine.make_move(index),
                Ok(Some(MoveInput::UseEngine)) => self.engine.make_best_move().map(|_| ()),
                Ok(None) => {
                    println!("Invalid input");
                    continue;
                }
                Err(InputError::UserExit) => break,
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            };

            match result {
                Ok(()) => {
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Err(error) => {
                    warn!("rejected move: {}", error);
                    println!("error: {}", error);
                }
            }
        }
    }
}
