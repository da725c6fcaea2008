//! Conversion of raw player text into values the game core accepts.

use crate::error::InputError;
use crate::game::Token;

/// Parse a 1-based column number in `[1, cols]` into a 0-based index.
pub fn parse_column(raw: &str, cols: usize) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if value < 1 || value as u64 > cols as u64 {
        return Err(InputError::ColumnOutOfRange { value, max: cols });
    }
    Ok(value as usize - 1)
}

/// Parse a player color. Accepts `white`/`w`/`1` and `black`/`b`/`2`, in
/// any case.
pub fn parse_token(raw: &str) -> Result<Token, InputError> {
    match raw.trim().to_lowercase().as_str() {
        "white" | "w" | "1" => Ok(Token::White),
        "black" | "b" | "2" => Ok(Token::Black),
        _ => Err(InputError::UnknownToken(raw.trim().to_string())),
    }
}
