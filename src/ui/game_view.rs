use crate::game::{GameSession, SessionState, Token};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = session.snapshot().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn token_color(token: Token) -> Color {
    match token {
        Token::White => Color::White,
        Token::Black => Color::LightBlue,
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let (status, color) = match session.state() {
        SessionState::AwaitingMove(token) => (
            format!("Current Player: {}  |  Move {}", token.name(), session.move_count() + 1),
            token_color(token),
        ),
        SessionState::Finished(Some(winner)) => {
            (format!("Game Over  |  {} wins", winner.name()), token_color(winner))
        }
        SessionState::Finished(None) => ("Game Over  |  Draw".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &GameSession, selected_column: usize, area: Rect) {
    let board = session.snapshot();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.cols() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let winning = session.winning_line();
    lines.extend(board_lines(board, winning.as_ref()));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.cols() {
        if col == selected_column && !session.is_finished() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter / 1-9: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
