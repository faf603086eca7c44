use crate::error::{EngineError, MoveError};
use crate::game::GameOutcome;
use crate::session::{Session, Turn};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

type EngineReply = Result<usize, EngineError>;

pub struct App {
    session: Session,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    last_move: Option<(usize, usize)>,
    /// Reply channel of the search currently running, if any.
    pending: Option<Receiver<EngineReply>>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let selected_column = session.state().board().cols() / 2;
        App {
            session,
            selected_column,
            should_quit: false,
            message: None,
            last_move: None,
            pending: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// True while a search is running on the worker thread.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            self.poll_engine();
            self.start_engine_if_due();

            terminal.draw(|f| super::game_view::render(f, self))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
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
        let cols = self.session.state().board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < cols {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        // A search still running for the old game has nowhere to report.
        self.pending = None;
        self.session.reset();
        self.selected_column = self.session.state().board().cols() / 2;
        self.last_move = None;
        self.message = Some("New game started!".to_string());
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self) {
        if self.session.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_thinking() || self.session.awaiting_engine() {
            self.message = Some("Wait for the engine to move.".to_string());
            return;
        }

        match self.session.human_move(self.selected_column) {
            Ok(turn) => self.record(turn),
            Err(err) => {
                self.message = Some(move_message(&err));
            }
        }
    }

    /// Spawn a search when it is the engine's turn and none is running.
    fn start_engine_if_due(&mut self) {
        if self.pending.is_some() || !self.session.awaiting_engine() {
            return;
        }

        let engine = self.session.engine();
        let side = self.session.engine_side();
        let mut board = self.session.state().board().clone();
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let reply = engine.choose_move(&mut board, side);
            // The receiver is gone if the game was restarted meanwhile.
            let _ = tx.send(reply);
        });

        tracing::debug!(side = side.name(), "engine search started");
        self.pending = Some(rx);
    }

    /// Commit the engine's reply once the worker has one.
    fn poll_engine(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(reply) => {
                self.pending = None;
                self.finish_engine(reply);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                tracing::error!("engine worker exited without a reply");
                self.message = Some("The engine stopped unexpectedly.".to_string());
            }
        }
    }

    fn finish_engine(&mut self, reply: EngineReply) {
        let played = reply.and_then(|column| Ok(self.session.apply_engine_move(column)?));
        match played {
            Ok(turn) => {
                self.message = Some(format!("Engine played column {}", turn.column + 1));
                self.record(turn);
            }
            Err(err) => {
                tracing::error!(%err, "engine move failed");
                self.message = Some(format!("Engine error: {err}"));
            }
        }
    }

    fn record(&mut self, turn: Turn) {
        self.last_move = Some((turn.row, turn.column));
        if let Some(outcome) = turn.outcome {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }
}

/// Status text for a rejected move, with columns numbered from 1 as on
/// screen.
fn move_message(err: &MoveError) -> String {
    match err {
        MoveError::ColumnFull(column) => format!("Column {} is full!", column + 1),
        MoveError::InvalidColumn { column, cols } => {
            format!("Column {} is not on the board (1-{})", column + 1, cols)
        }
        MoveError::GameOver => "Game is over!".to_string(),
        MoveError::OutOfTurn(_) => "Wait for the engine to move.".to_string(),
    }
}
