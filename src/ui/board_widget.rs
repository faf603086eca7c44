use crate::game::{Board, Cell, WinLine};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of one rendered cell.
const CELL_WIDTH: usize = 3;

/// What to emphasise when drawing a board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlights<'a> {
    /// Column under the cursor.
    pub selected: Option<usize>,
    /// Cell of the most recent move.
    pub last_move: Option<(usize, usize)>,
    pub win_line: Option<&'a WinLine>,
}

fn cell_style(cell: Cell) -> (&'static str, Color) {
    match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", Color::Red),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
    }
}

/// Column numbers above the board, with the selected one underlined.
fn header_line(cols: usize, selected: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")]; // 3 chars to match "  ║"
    for col in 0..cols {
        // Two-digit labels on wide boards still fit the cell.
        let label = format!("{:^width$}", col + 1, width = CELL_WIDTH);
        if Some(col) == selected {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::raw(label));
        }
    }
    spans.push(Span::raw("  ")); // match " ║"
    Line::from(spans)
}

/// Lay out a board of any size as framed text lines.
pub fn board_lines(board: &Board, highlights: Highlights<'_>) -> Vec<Line<'static>> {
    let cols = board.cols();
    let inner = "\u{2550}".repeat(cols * CELL_WIDTH + 1);
    let mut lines = Vec::with_capacity(board.rows() + 4);

    lines.push(header_line(cols, highlights.selected));
    lines.push(Line::from(format!("  \u{2554}{inner}\u{2557}")));

    for row in 0..board.rows() {
        let mut spans = vec![Span::raw("  \u{2551}")];
        for col in 0..cols {
            let (symbol, color) = cell_style(board.get(row, col));
            let mut style = Style::default().fg(color);
            if highlights.win_line.is_some_and(|line| line.contains(row, col)) {
                style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
            } else if highlights.last_move == Some((row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  \u{255a}{inner}\u{255d}")));

    let mut indicator = vec![Span::raw("   ")];
    for col in 0..cols {
        if Some(col) == highlights.selected {
            indicator.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
        } else {
            indicator.push(Span::raw("   "));
        }
    }
    indicator.push(Span::raw("  "));
    lines.push(Line::from(indicator));

    lines
}
