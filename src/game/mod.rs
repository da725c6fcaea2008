//! Core Connect Four game logic: the drop grid, four-in-a-row detection and
//! the turn-owning session. Nothing in here performs I/O.

mod board;
mod session;
mod token;
pub mod win;

pub use board::{Board, COLS, ROWS};
pub use session::{GameSession, MoveOutcome, RejectReason, SessionState};
pub use token::{Cell, Token};
pub use win::{find_winning_line, has_winning_line, Direction, WinningLine, CONNECT};
