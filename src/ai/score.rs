//! Tagged evaluation results.
//!
//! Decisive outcomes are variants rather than extreme integers, so adding
//! or subtracting a ply can never wrap around.

use std::cmp::Ordering;
use std::fmt;

/// Magnitude used when a [`Score`] is projected onto a plain integer.
pub const SENTINEL: i64 = i32::MAX as i64;

/// Static verdict on a position, from the engine side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    /// The engine side has four in a row.
    Win,
    /// The opponent has four in a row.
    Loss,
    /// Neither side has won; graded line count difference.
    Heuristic(i64),
}

impl Evaluation {
    pub fn is_decisive(self) -> bool {
        !matches!(self, Evaluation::Heuristic(_))
    }
}

/// Value of a searched position.
///
/// Ordering: every loss is below every heuristic value, which is below
/// every win. A win found at a smaller ply beats one found deeper; a loss
/// found at a larger ply beats one found sooner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    Loss { ply: u8 },
    Heuristic(i64),
    Win { ply: u8 },
}

impl Score {
    /// Lower bound of the search window. No real loss is found at ply 0.
    pub const NEG_INFINITY: Score = Score::Loss { ply: 0 };
    /// Upper bound of the search window.
    pub const POS_INFINITY: Score = Score::Win { ply: 0 };

    /// Score of a position where the search stops at `ply`.
    pub fn terminal(eval: Evaluation, ply: u8) -> Score {
        match eval {
            Evaluation::Win => Score::Win { ply },
            Evaluation::Loss => Score::Loss { ply },
            Evaluation::Heuristic(value) => Score::Heuristic(value),
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, Score::Win { .. })
    }

    pub fn is_loss(self) -> bool {
        matches!(self, Score::Loss { .. })
    }

    /// Project onto one integer scale: wins are `SENTINEL - ply`, losses
    /// `-SENTINEL + ply`. Only meaningful for display and logging.
    pub fn as_sentinel_i64(self) -> i64 {
        match self {
            Score::Loss { ply } => -SENTINEL + i64::from(ply),
            Score::Heuristic(value) => value,
            Score::Win { ply } => SENTINEL - i64::from(ply),
        }
    }

    fn rank(self) -> (u8, i64) {
        match self {
            Score::Loss { ply } => (0, i64::from(ply)),
            Score::Heuristic(value) => (1, value),
            Score::Win { ply } => (2, -i64::from(ply)),
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss { ply } => write!(f, "loss at ply {ply}"),
            Score::Heuristic(value) => write!(f, "{value:+}"),
            Score::Win { ply } => write!(f, "win at ply {ply}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisive_scores_bracket_heuristics() {
        let big = Score::Heuristic(1_000_000_000_000);
        let small = Score::Heuristic(-1_000_000_000_000);
        assert!(Score::Win { ply: 40 } > big);
        assert!(Score::Loss { ply: 40 } < small);
        assert!(small < big);
    }

    #[test]
    fn shallow_wins_and_late_losses_are_preferred() {
        assert!(Score::Win { ply: 1 } > Score::Win { ply: 3 });
        assert!(Score::Loss { ply: 6 } > Score::Loss { ply: 2 });
    }

    #[test]
    fn infinities_bound_everything_reachable() {
        for ply in 1..=u8::MAX {
            assert!(Score::NEG_INFINITY < Score::Loss { ply });
            assert!(Score::POS_INFINITY > Score::Win { ply });
        }
        assert_eq!(Score::NEG_INFINITY.max(Score::Heuristic(0)), Score::Heuristic(0));
    }

    #[test]
    fn terminal_maps_evaluations() {
        assert_eq!(Score::terminal(Evaluation::Win, 3), Score::Win { ply: 3 });
        assert_eq!(Score::terminal(Evaluation::Loss, 2), Score::Loss { ply: 2 });
        assert_eq!(
            Score::terminal(Evaluation::Heuristic(-17), 7),
            Score::Heuristic(-17)
        );
    }

    #[test]
    fn sentinel_projection_matches_ordering() {
        let scores = [
            Score::NEG_INFINITY,
            Score::Loss { ply: 1 },
            Score::Loss { ply: 5 },
            Score::Heuristic(-2_000_000),
            Score::Heuristic(0),
            Score::Heuristic(1_001),
            Score::Win { ply: 7 },
            Score::Win { ply: 1 },
            Score::POS_INFINITY,
        ];
        for pair in scores.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
            assert!(pair[0].as_sentinel_i64() < pair[1].as_sentinel_i64());
        }
        assert_eq!(Score::Win { ply: 1 }.as_sentinel_i64(), i64::from(i32::MAX) - 1);
        assert_eq!(Score::NEG_INFINITY.as_sentinel_i64(), -i64::from(i32::MAX));
    }

    #[test]
    fn display() {
        assert_eq!(Score::Win { ply: 3 }.to_string(), "win at ply 3");
        assert_eq!(Score::Heuristic(1_002).to_string(), "+1002");
        assert_eq!(Score::Heuristic(-5).to_string(), "-5");
    }
}
