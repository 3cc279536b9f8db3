//! Orchestration around the search: game state, turn handling, input and
//! rendering for the command-line front end.

pub mod engine;
pub mod game_loop;
pub mod input_source;
pub mod position_counter;
pub mod renderer;
