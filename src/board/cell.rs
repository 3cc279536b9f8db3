use std::fmt;

use super::player::Player;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player occupying this cell, if any.
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '-' | '.' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }

    pub fn swapped(&self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::X => Cell::O,
            Cell::O => Cell::X,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
