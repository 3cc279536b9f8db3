use std::io;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user requested exit")]
    UserExit,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MoveInput {
    /// Play on the given cell index (0-8).
    Cell(usize),
    UseEngine,
}

static CELL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new("^([1-9])$").unwrap());
static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new("^([a-cA-C])([1-3])$").unwrap());

/// Reads one line from stdin and parses it as a move.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Err(InputError::UserExit),
        Ok(_n) => parse_move(&input),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

/// Accepts a cell number `1`-`9` (reading order, top-left first) or a
/// coordinate `a1`-`c3` (column letter, row number from the top).
pub fn parse_move(input: &str) -> Result<MoveInput, InputError> {
    let raw = input.trim();

    if raw == "quit" || raw == "q" {
        return Err(InputError::UserExit);
    }

    if let Some(caps) = CELL_NUMBER_RE.captures(raw) {
        let number: usize = caps[1].parse().map_err(|_| InputError::InvalidInput {
            input: raw.to_string(),
        })?;
        return Ok(MoveInput::Cell(number - 1));
    }

    if let Some(caps) = COORDINATE_RE.captures(raw) {
        let column = match caps[1].to_ascii_lowercase().as_str() {
            "a" => 0,
            "b" => 1,
            _ => 2,
        };
        let row: usize = caps[2].parse().map_err(|_| InputError::InvalidInput {
            input: raw.to_string(),
        })?;
        return Ok(MoveInput::Cell((row - 1) * 3 + column));
    }

    Err(InputError::InvalidInput {
        input: raw.to_string(),
    })
}
