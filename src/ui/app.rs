use crate::config::AppConfig;
use crate::game::{GameSession, MoveOutcome, RejectReason, Token};
use crate::input::parse_column;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    session: GameSession,
    rows: usize,
    cols: usize,
    first_player: Token,
    poll_interval: Duration,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let game = &config.game;
        App {
            session: GameSession::new(game.rows, game.cols, game.first_player),
            rows: game.rows,
            cols: game.cols,
            first_player: game.first_player,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            selected_column: game.cols / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                match parse_column(c.encode_utf8(&mut [0; 4]), self.cols) {
                    Ok(col) => {
                        self.selected_column = col;
                        self.drop_token();
                    }
                    Err(e) => self.message = Some(e.to_string()),
                }
            }
            KeyCode::Char('r') => {
                self.session = GameSession::new(self.rows, self.cols, self.first_player);
                self.selected_column = self.cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the current player's token in the selected column
    fn drop_token(&mut self) {
        match self.session.attempt_move(self.selected_column) {
            Ok(MoveOutcome::Continued(_)) => {}
            Ok(MoveOutcome::Won(winner)) => {
                self.message = Some(format!("{} wins! Press 'r' to restart.", winner.name()));
            }
            Ok(MoveOutcome::Draw) => {
                self.message = Some("It's a draw! Press 'r' to restart.".to_string());
            }
            Ok(MoveOutcome::Rejected(RejectReason::ColumnFull)) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(MoveOutcome::Rejected(RejectReason::OutOfRange)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(_) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
