use serde::{Deserialize, Serialize};

/// Occupancy of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The token occupying this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Token::White),
            Cell::Black => Some(Token::Black),
        }
    }
}

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    White,
    Black,
}

impl Token {
    /// Get the other player's token
    pub fn other(self) -> Token {
        match self {
            Token::White => Token::Black,
            Token::Black => Token::White,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Token::White => Cell::White,
            Token::Black => Cell::Black,
        }
    }

    /// Get token name for display
    pub fn name(self) -> &'static str {
        match self {
            Token::White => "White",
            Token::Black => "Black",
        }
    }

    /// Glyph used by the console driver.
    pub fn symbol(self) -> char {
        match self {
            Token::White => '\u{25cf}',
            Token::Black => '\u{25cb}',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
