use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The side to move. X always maximizes the search score, O always minimizes it.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opposite(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn is_maximizing(&self) -> bool {
        match self {
            Player::X => true,
            Player::O => false,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::X => "X",
            Player::O => "O",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: x, o, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Player::ALL.contains(&Player::random()));
    }

    #[test]
    fn test_parse_x() {
        assert_eq!(Player::X, Player::from_str("x").unwrap());
        assert_eq!(Player::X, Player::from_str("X").unwrap());
    }

    #[test]
    fn test_parse_o() {
        assert_eq!(Player::O, Player::from_str("o").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Player::from_str("z").is_err());
    }

    #[test]
    fn test_opposite_and_role() {
        assert_eq!(Player::X.opposite(), Player::O);
        assert_eq!(Player::O.opposite(), Player::X);
        assert!(Player::X.is_maximizing());
        assert!(!Player::O.is_maximizing());
    }
}
