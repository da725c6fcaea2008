use crate::game::{Board, Cell, WinningLine};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Styled three-character glyph for a single cell.
pub fn cell_span(cell: Cell, highlighted: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::White => (" \u{25cf} ", Color::White),
        Cell::Black => (" \u{25cb} ", Color::LightBlue),
    };
    let mut style = Style::default().fg(color);
    if highlighted {
        style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
    }
    Span::styled(symbol, style)
}

/// Framed board rows, one [`Line`] per grid row. Cells of `winning` are
/// highlighted.
pub fn board_lines(board: &Board, winning: Option<&WinningLine>) -> Vec<Line<'static>> {
    let inner_width = board.cols() * 3 + 1;
    let mut lines = Vec::with_capacity(board.rows() + 2);

    lines.push(Line::from(format!("  \u{2554}{}\u{2557}", "\u{2550}".repeat(inner_width))));

    for (row, cells) in board.row_slices().enumerate() {
        let mut spans = vec![Span::raw("  \u{2551}")];
        for (col, &cell) in cells.iter().enumerate() {
            let highlighted = winning.is_some_and(|line| line.contains(row, col));
            spans.push(cell_span(cell, highlighted));
        }
        spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  \u{255a}{}\u{255d}", "\u{2550}".repeat(inner_width))));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{find_winning_line, Token};

    #[test]
    fn test_board_lines_frame_every_row() {
        let board = Board::new();
        let lines = board_lines(&board, None);
        assert_eq!(lines.len(), board.rows() + 2);
        // border + 7 cells + border
        assert!(lines[1..=board.rows()].iter().all(|l| l.spans.len() == 9));
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_token(col, Token::White);
        }
        let line = find_winning_line(&board).unwrap();
        let lines = board_lines(&board, Some(&line));

        let bottom = &lines[board.rows()];
        assert_eq!(bottom.spans[1].style.bg, Some(Color::Green));
        assert_eq!(bottom.spans[5].style.bg, None);
    }
}
