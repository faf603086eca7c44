use crate::game::{GameOutcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::board_widget::{self, Highlights};

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let board_height = app.session().state().board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Status line shown in the header.
pub(super) fn status_text(app: &App) -> (String, Color) {
    let session = app.session();
    let state = session.state();
    let human = session.human();
    match state.outcome() {
        Some(GameOutcome::Winner(player)) if player == human => {
            (format!("{} wins! You beat the engine", player.name()), player_color(player))
        }
        Some(GameOutcome::Winner(player)) => {
            (format!("{} wins! The engine got you", player.name()), player_color(player))
        }
        Some(GameOutcome::Draw) => ("Draw: the board is full".to_string(), Color::White),
        None if app.is_thinking() || session.awaiting_engine() => (
            format!(
                "Engine ({}) is thinking at depth {}...",
                session.engine_side().name(),
                session.engine().depth()
            ),
            player_color(session.engine_side()),
        ),
        None => (
            format!("Your move ({})", human.name()),
            player_color(human),
        ),
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status, color) = status_text(app);
    let dims = app.session().state().board().dimensions();

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect Four {dims}")),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.session().state();
    let selected = if state.is_terminal() {
        None
    } else {
        Some(app.selected_column())
    };
    let lines = board_widget::board_lines(
        state.board(),
        Highlights {
            selected,
            last_move: app.last_move(),
            win_line: state.win_line(),
        },
    );

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("\u{2190}/\u{2192}: Move  |  1-9: Column  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
