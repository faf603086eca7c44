use super::board::{Board, Cell};
use super::player::Player;
use super::window::{windows, Coord, Orientation, LINE};

/// Four same-owner cells in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    pub player: Player,
    pub orientation: Orientation,
    /// Coordinates in the order the scan visits them.
    pub cells: [Coord; LINE],
}

impl WinLine {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Scan every window and return the first one filled by a single player.
///
/// When several lines exist only the first in scan order is reported.
pub fn detect_win(board: &Board) -> Option<WinLine> {
    windows(board.dimensions()).find_map(|window| {
        let [first, rest @ ..] = window.cells;
        let owner = board.get(first.0, first.1);
        if owner == Cell::Empty {
            return None;
        }
        if rest.iter().all(|&(r, c)| board.get(r, c) == owner) {
            owner.owner().map(|player| WinLine {
                player,
                orientation: window.orientation,
                cells: window.cells,
            })
        } else {
            None
        }
    })
}
