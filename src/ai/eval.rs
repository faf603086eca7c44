use crate::game::window::windows;
use crate::game::{Board, Cell, Player};

use super::score::Evaluation;

/// Weight of an open window holding three of a side's pieces.
pub const THREE_WEIGHT: i64 = 1_000_000;
/// Weight of an open window holding two pieces.
pub const TWO_WEIGHT: i64 = 1_000;
/// Weight of an open window holding one piece.
pub const ONE_WEIGHT: i64 = 1;

/// Trait for evaluating a board position from a player's perspective.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> Evaluation;
}

/// Counts of open windows (no opposing piece) by how many of a side's
/// pieces they hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub ones: i64,
    pub twos: i64,
    pub threes: i64,
}

impl LineTally {
    /// Weighted sum. Any single three outweighs any realistic number of
    /// twos and ones, and any two outweighs the ones.
    pub fn value(&self) -> i64 {
        THREE_WEIGHT * self.threes + TWO_WEIGHT * self.twos + ONE_WEIGHT * self.ones
    }
}

/// Result of scanning the board for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScore {
    /// A window is entirely this side's pieces.
    Four,
    Lines(LineTally),
}

/// Default heuristic: tallies every open four-cell window per side.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEvaluator;

impl LineEvaluator {
    /// Scan all windows for `side`. Windows holding an opposing piece are
    /// blocked and count for nothing; a full window stops the scan.
    pub fn score(&self, board: &Board, side: Player) -> LineScore {
        let own = side.to_cell();
        let mut tally = LineTally::default();

        for window in windows(board.dimensions()) {
            let mut pieces = 0;
            let mut blocked = false;
            for &(row, col) in &window.cells {
                match board.get(row, col) {
                    c if c == own => pieces += 1,
                    Cell::Empty => {}
                    _ => {
                        blocked = true;
                        break;
                    }
                }
            }
            if blocked {
                continue;
            }
            match pieces {
                0 => {}
                1 => tally.ones += 1,
                2 => tally.twos += 1,
                3 => tally.threes += 1,
                _ => return LineScore::Four,
            }
        }

        LineScore::Lines(tally)
    }
}

impl Evaluator for LineEvaluator {
    /// `player`'s line value minus the opponent's. A four for `player` is
    /// checked first and wins outright; a four for the opponent loses.
    fn evaluate(&self, board: &Board, player: Player) -> Evaluation {
        let own = match self.score(board, player) {
            LineScore::Four => return Evaluation::Win,
            LineScore::Lines(tally) => tally.value(),
        };
        let opp = match self.score(board, player.other()) {
            LineScore::Four => return Evaluation::Loss,
            LineScore::Lines(tally) => tally.value(),
        };
        Evaluation::Heuristic(own - opp)
    }
}
