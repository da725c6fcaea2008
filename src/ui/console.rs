//! Line-oriented driver for terminals without raw mode (pipes, dumb
//! terminals). Reads moves from any [`BufRead`] and writes to any [`Write`].

use std::io::{self, BufRead, Write};

use crate::game::{Board, GameSession, MoveOutcome, Token};
use crate::input::{parse_column, parse_token};

/// Read one line, failing on end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the game ended",
        ));
    }
    Ok(line)
}

/// Ask who plays first until a known color is entered.
pub fn choose_first_player<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Token> {
    writeln!(output, "Select player 1 color (white or black)")?;
    loop {
        match parse_token(&read_line(input)?) {
            Ok(token) => return Ok(token),
            Err(_) => writeln!(output, "Insert a valid input")?,
        }
    }
}

pub fn write_board<W: Write>(output: &mut W, board: &Board) -> io::Result<()> {
    for row in board.row_slices() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell.token() {
                Some(token) => token.symbol().to_string(),
                None => "_".to_string(),
            })
            .collect();
        writeln!(output, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Play a session to the end. Returns the winner, or `None` on a draw.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Token>> {
    let cols = session.snapshot().cols();

    while let Some(turn) = session.current_turn() {
        writeln!(output, "Select a position to play (1-{}) {}", cols, turn)?;

        let outcome = loop {
            let column = match parse_column(&read_line(input)?, cols) {
                Ok(column) => column,
                Err(e) => {
                    writeln!(output, "invalid play, {}", e)?;
                    continue;
                }
            };
            match session.attempt_move(column) {
                Ok(MoveOutcome::Rejected(_)) => {
                    writeln!(output, "Select another position to play (1-{})", cols)?;
                }
                Ok(outcome) => break outcome,
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
            }
        };

        write_board(output, session.snapshot())?;

        match outcome {
            MoveOutcome::Won(winner) => {
                writeln!(output, "The winner is {}", winner)?;
                return Ok(Some(winner));
            }
            MoveOutcome::Draw => {
                writeln!(output, "The board is full, it's a draw")?;
                return Ok(None);
            }
            MoveOutcome::Continued(_) | MoveOutcome::Rejected(_) => {}
        }
    }

    Ok(session.winner())
}
