use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cell index {index} is out of range, expected 0-8")]
    IndexOutOfRange { index: usize },
    #[error("Cannot play on cell {index}, it is already occupied")]
    CellOccupied { index: usize },
    #[error("Wrong number of cells: 9 expected, {count:?} given")]
    InvalidCellCount { count: usize },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCellCharacter { invalid_character: char },
}
