use log::info;

use super::board::{Board, COLS, ROWS};
use super::token::Token;
use super::win::{find_winning_line, WinningLine};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMove(Token),
    /// `None` when the board filled up without a winning line.
    Finished(Option<Token>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    ColumnFull,
    OutOfRange,
}

/// Result of a single attempted play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    /// Nothing changed; the same player must pick another column.
    Rejected(RejectReason),
    Continued(Token),
    Won(Token),
    Draw,
}

/// Turn owner: holds the board and sequences moves until someone wins.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: SessionState,
    winning_line: Option<WinningLine>,
    moves: usize,
}

impl GameSession {
    pub fn new(rows: usize, cols: usize, first: Token) -> Self {
        GameSession {
            board: Board::with_size(rows, cols),
            state: SessionState::AwaitingMove(first),
            winning_line: None,
            moves: 0,
        }
    }

    /// Session on the standard 6x7 board
    pub fn standard(first: Token) -> Self {
        Self::new(ROWS, COLS, first)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Token to move, or `None` once the game is over.
    pub fn current_turn(&self) -> Option<Token> {
        match self.state {
            SessionState::AwaitingMove(token) => Some(token),
            SessionState::Finished(_) => None,
        }
    }

    /// Read-only view of the grid for rendering.
    pub fn snapshot(&self) -> &Board {
        &self.board
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished(_))
    }

    pub fn winner(&self) -> Option<Token> {
        match self.state {
            SessionState::Finished(winner) => winner,
            SessionState::AwaitingMove(_) => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Number of accepted drops so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Drop the current player's token into `column`.
    ///
    /// A full or out-of-range column is a normal outcome
    /// ([`MoveOutcome::Rejected`]); calling this after the game finished is
    /// [`GameError::GameFinished`].
    pub fn attempt_move(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        let token = match self.state {
            SessionState::AwaitingMove(token) => token,
            SessionState::Finished(_) => return Err(GameError::GameFinished),
        };

        if !self.board.drop_token(column, token) {
            let reason = if column >= self.board.cols() {
                RejectReason::OutOfRange
            } else {
                RejectReason::ColumnFull
            };
            return Ok(MoveOutcome::Rejected(reason));
        }
        self.moves += 1;

        if let Some(line) = find_winning_line(&self.board) {
            info!("{} wins after {} moves", line.token, self.moves);
            self.winning_line = Some(line);
            self.state = SessionState::Finished(Some(token));
            return Ok(MoveOutcome::Won(token));
        }

        if self.board.is_full() {
            info!("board full after {} moves, draw", self.moves);
            self.state = SessionState::Finished(None);
            return Ok(MoveOutcome::Draw);
        }

        let next = token.other();
        self.state = SessionState::AwaitingMove(next);
        Ok(MoveOutcome::Continued(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let session = GameSession::standard(Token::Black);
        assert_eq!(session.current_turn(), Some(Token::Black));
        assert_eq!(session.state(), SessionState::AwaitingMove(Token::Black));
        assert!(!session.is_finished());
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_successful_move_passes_turn() {
        let mut session = GameSession::standard(Token::White);
        let outcome = session.attempt_move(3).unwrap();

        assert_eq!(outcome, MoveOutcome::Continued(Token::Black));
        assert_eq!(session.current_turn(), Some(Token::Black));
        assert_eq!(session.snapshot().cell_at(5, 3).unwrap(), Cell::White);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::standard(Token::White);
        for _ in 0..ROWS {
            let _ = session.attempt_move(0).unwrap();
        }
        let turn = session.current_turn();
        let before = session.snapshot().clone();

        let outcome = session.attempt_move(0).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::ColumnFull));
        assert_eq!(session.current_turn(), turn);
        assert_eq!(session.snapshot(), &before);

        let outcome = session.attempt_move(COLS).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::OutOfRange));
        assert_eq!(session.current_turn(), turn);
    }

    #[test]
    fn test_win_detection() {
        let mut session = GameSession::standard(Token::White);

        // White builds the bottom row, Black stacks on top of it
        for col in 0..3 {
            assert_eq!(
                session.attempt_move(col).unwrap(),
                MoveOutcome::Continued(Token::Black)
            );
            assert_eq!(
                session.attempt_move(col).unwrap(),
                MoveOutcome::Continued(Token::White)
            );
        }
        assert_eq!(session.attempt_move(3).unwrap(), MoveOutcome::Won(Token::White));

        assert!(session.is_finished());
        assert_eq!(session.winner(), Some(Token::White));
        assert_eq!(session.current_turn(), None);
        assert_eq!(session.winning_line().map(|l| l.start), Some((ROWS - 1, 0)));
    }

    #[test]
    fn test_move_after_win_is_an_error() {
        let mut session = GameSession::standard(Token::Black);
        for col in 0..3 {
            let _ = session.attempt_move(col).unwrap();
            let _ = session.attempt_move(col).unwrap();
        }
        let _ = session.attempt_move(3).unwrap();
        let before = session.snapshot().clone();

        assert_eq!(session.attempt_move(4), Err(GameError::GameFinished));
        assert_eq!(session.snapshot(), &before);
        assert_eq!(session.state(), SessionState::Finished(Some(Token::Black)));
    }

    #[test]
    fn test_draw_on_full_board() {
        // 2x2 board cannot hold a line of four
        let mut session = GameSession::new(2, 2, Token::White);
        assert_eq!(session.attempt_move(0).unwrap(), MoveOutcome::Continued(Token::Black));
        assert_eq!(session.attempt_move(0).unwrap(), MoveOutcome::Continued(Token::White));
        assert_eq!(session.attempt_move(1).unwrap(), MoveOutcome::Continued(Token::Black));
        assert_eq!(session.attempt_move(1).unwrap(), MoveOutcome::Draw);

        assert_eq!(session.state(), SessionState::Finished(None));
        assert_eq!(session.winner(), None);
        assert_eq!(session.attempt_move(0), Err(GameError::GameFinished));
    }
}
