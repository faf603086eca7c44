//! Four-cell windows: the unit both win detection and evaluation scan over.
//!
//! Windows are produced in one fixed order: horizontals row by row, then
//! verticals column by column, then down-right diagonals, then up-right
//! diagonals, each diagonal walked from one end before the next. Anything
//! that reports "the first" window depends on this order.

use super::board::Dimensions;

/// Number of cells in a line that wins the game.
pub const LINE: usize = 4;

/// A `(row, col)` board coordinate.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
}

impl Orientation {
    /// All orientations in scan order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// Row and column step from one cell of a window to the next.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (-1, 1),
        }
    }

    /// Number of lines (rows, columns or diagonals) scanned for this
    /// orientation. Diagonals too short to hold a window are left out.
    fn line_count(self, dims: Dimensions) -> usize {
        let Dimensions { rows, cols } = dims;
        match self {
            Orientation::Horizontal => rows,
            Orientation::Vertical => cols,
            Orientation::DiagonalDown => rows.saturating_sub(LINE - 1) + cols.saturating_sub(LINE),
            Orientation::DiagonalUp => (rows + cols).saturating_sub(2 * LINE - 1),
        }
    }

    /// First cell of the `index`-th line; windows along it start here.
    ///
    /// `\` diagonals start down the left edge from the top corner, then
    /// along the top edge. `/` diagonals start at their bottom-left end,
    /// ordered by `row + col`: up the left edge from row 3, then along the
    /// bottom edge.
    fn line_start(self, dims: Dimensions, index: usize) -> Coord {
        let Dimensions { rows, .. } = dims;
        match self {
            Orientation::Horizontal => (index, 0),
            Orientation::Vertical => (0, index),
            Orientation::DiagonalDown => {
                let left_edge = rows.saturating_sub(LINE - 1);
                if index < left_edge {
                    (index, 0)
                } else {
                    (0, index - left_edge + 1)
                }
            }
            Orientation::DiagonalUp => {
                let sum = index + LINE - 1;
                if sum < rows {
                    (sum, 0)
                } else {
                    let bottom = rows.saturating_sub(1);
                    (bottom, sum - bottom)
                }
            }
        }
    }

    /// True when all four cells of the window at `origin` are on the board.
    fn fits(self, dims: Dimensions, origin: Coord) -> bool {
        let (dr, dc) = self.step();
        let reach = (LINE - 1) as isize;
        let last_row = origin.0 as isize + dr * reach;
        let last_col = origin.1 as isize + dc * reach;
        (0..dims.rows as isize).contains(&last_row) && (0..dims.cols as isize).contains(&last_col)
    }

    /// Every valid window origin for this orientation, in scan order:
    /// line by line, and along each line in the direction of `step`.
    fn origins(self, dims: Dimensions) -> impl Iterator<Item = Coord> {
        let (dr, dc) = self.step();
        (0..self.line_count(dims)).flat_map(move |index| {
            let (r0, c0) = self.line_start(dims, index);
            (0isize..)
                .map(move |t| ((r0 as isize + dr * t) as usize, (c0 as isize + dc * t) as usize))
                .take_while(move |&origin| self.fits(dims, origin))
        })
    }

    /// The four cells of the window starting at `origin`.
    pub fn cells(self, origin: Coord) -> [Coord; LINE] {
        let (dr, dc) = self.step();
        let (r0, c0) = origin;
        std::array::from_fn(|i| {
            let i = i as isize;
            (
                (r0 as isize + dr * i) as usize,
                (c0 as isize + dc * i) as usize,
            )
        })
    }
}

/// A run of four consecutive cells along one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub orientation: Orientation,
    pub cells: [Coord; LINE],
}

/// Every window of a board of the given size, in scan order.
pub fn windows(dims: Dimensions) -> impl Iterator<Item = Window> {
    Orientation::ALL.into_iter().flat_map(move |orientation| {
        orientation.origins(dims).map(move |origin| Window {
            orientation,
            cells: orientation.cells(origin),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(dims: Dimensions, orientation: Orientation) -> usize {
        windows(dims)
            .filter(|w| w.orientation == orientation)
            .count()
    }

    #[test]
    fn standard_board_window_counts() {
        let dims = Dimensions::default();
        assert_eq!(count(dims, Orientation::Horizontal), 24);
        assert_eq!(count(dims, Orientation::Vertical), 21);
        assert_eq!(count(dims, Orientation::DiagonalDown), 12);
        assert_eq!(count(dims, Orientation::DiagonalUp), 12);
        assert_eq!(windows(dims).count(), 69);
    }

    #[test]
    fn smallest_board_has_one_window_per_line() {
        let dims = Dimensions { rows: 4, cols: 4 };
        assert_eq!(count(dims, Orientation::Horizontal), 4);
        assert_eq!(count(dims, Orientation::Vertical), 4);
        assert_eq!(count(dims, Orientation::DiagonalDown), 1);
        assert_eq!(count(dims, Orientation::DiagonalUp), 1);
    }

    #[test]
    fn scan_order_is_orientation_major() {
        let all: Vec<Window> = windows(Dimensions::default()).collect();
        let first_of = |o| all.iter().position(|w| w.orientation == o).unwrap();
        assert_eq!(first_of(Orientation::Horizontal), 0);
        assert!(first_of(Orientation::Vertical) > first_of(Orientation::Horizontal));
        assert!(first_of(Orientation::DiagonalDown) > first_of(Orientation::Vertical));
        assert!(first_of(Orientation::DiagonalUp) > first_of(Orientation::DiagonalDown));

        assert_eq!(all[0].cells, [(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(all[1].cells, [(0, 1), (0, 2), (0, 3), (0, 4)]);
        // Verticals walk down a column before moving right
        assert_eq!(all[24].cells, [(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(all[25].cells, [(1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn down_diagonals_walk_left_edge_then_top_edge() {
        let origins: Vec<Coord> = Orientation::DiagonalDown
            .origins(Dimensions::default())
            .collect();
        assert_eq!(
            origins,
            vec![
                (0, 0), (1, 1), (2, 2),
                (1, 0), (2, 1),
                (2, 0),
                (0, 1), (1, 2), (2, 3),
                (0, 2), (1, 3),
                (0, 3),
            ]
        );
    }

    #[test]
    fn up_diagonals_walk_from_bottom_left_end() {
        let origins: Vec<Coord> = Orientation::DiagonalUp
            .origins(Dimensions::default())
            .collect();
        assert_eq!(
            origins,
            vec![
                (3, 0),
                (4, 0), (3, 1),
                (5, 0), (4, 1), (3, 2),
                (5, 1), (4, 2), (3, 3),
                (5, 2), (4, 3),
                (5, 3),
            ]
        );
    }

    #[test]
    fn diagonal_line_counts_on_tall_and_wide_boards() {
        let tall = Dimensions { rows: 9, cols: 5 };
        assert_eq!(count(tall, Orientation::DiagonalDown), 12);
        assert_eq!(count(tall, Orientation::DiagonalUp), 12);
        let wide = Dimensions { rows: 4, cols: 10 };
        assert_eq!(count(wide, Orientation::DiagonalDown), 7);
        assert_eq!(count(wide, Orientation::DiagonalUp), 7);
    }

    #[test]
    fn diagonal_cells() {
        assert_eq!(
            Orientation::DiagonalDown.cells((1, 2)),
            [(1, 2), (2, 3), (3, 4), (4, 5)]
        );
        assert_eq!(
            Orientation::DiagonalUp.cells((5, 0)),
            [(5, 0), (4, 1), (3, 2), (2, 3)]
        );
    }

    #[test]
    fn all_cells_in_bounds() {
        let dims = Dimensions { rows: 5, cols: 8 };
        for w in windows(dims) {
            for (r, c) in w.cells {
                assert!(r < dims.rows && c < dims.cols, "{w:?} out of bounds");
            }
        }
    }
}
