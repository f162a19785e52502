//! Cell coordinates on a 9×9 board.

use std::fmt::{self, Display};

/// A cell coordinate: a (row, column) pair, each in `0..=8`.
///
/// Rows count from the top, columns from the left.
///
/// # Examples
///
/// ```
/// use stepdoku_core::Pos;
///
/// let pos = Pos::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.to_string(), "r4c7");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Creates a coordinate from a row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the top-left cell of the 3×3 box containing this cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepdoku_core::Pos;
    ///
    /// assert_eq!(Pos::new(4, 7).box_origin(), Pos::new(3, 6));
    /// assert_eq!(Pos::new(0, 0).box_origin(), Pos::new(0, 0));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: self.row / 3 * 3,
            col: self.col / 3 * 3,
        }
    }

    /// Returns the next cell in row-major order, or `None` past (8, 8).
    #[must_use]
    pub const fn next_row_major(self) -> Option<Self> {
        match (self.row, self.col) {
            (8, 8) => None,
            (row, 8) => Some(Self { row: row + 1, col: 0 }),
            (row, col) => Some(Self { row, col: col + 1 }),
        }
    }

    /// Returns the previous cell in row-major order, or `None` before (0, 0).
    #[must_use]
    pub const fn prev_row_major(self) -> Option<Self> {
        match (self.row, self.col) {
            (0, 0) => None,
            (row, 0) => Some(Self { row: row - 1, col: 8 }),
            (row, col) => Some(Self { row, col: col - 1 }),
        }
    }

    /// Returns all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self::new(row, col)))
    }

    /// Returns the 20 cells sharing a row, column, or box with this cell.
    ///
    /// The cell itself is not a peer of itself. Placing or clearing a digit
    /// at a cell can only change candidate sets at its peers (and at the
    /// cell itself).
    ///
    /// # Examples
    ///
    /// ```
    /// use stepdoku_core::Pos;
    ///
    /// let peers: Vec<_> = Pos::new(0, 0).peers().collect();
    /// assert_eq!(peers.len(), 20);
    /// assert!(peers.contains(&Pos::new(0, 8)));
    /// assert!(peers.contains(&Pos::new(8, 0)));
    /// assert!(peers.contains(&Pos::new(2, 2)));
    /// assert!(!peers.contains(&Pos::new(0, 0)));
    /// ```
    pub fn peers(self) -> impl Iterator<Item = Self> {
        let row_peers = (0..9)
            .filter(move |&col| col != self.col)
            .map(move |col| Self::new(self.row, col));
        let col_peers = (0..9)
            .filter(move |&row| row != self.row)
            .map(move |row| Self::new(row, self.col));
        let origin = self.box_origin();
        let box_peers = (0..3)
            .flat_map(move |dr| (0..3).map(move |dc| Self::new(origin.row + dr, origin.col + dc)))
            .filter(move |pos| pos.row != self.row && pos.col != self.col);
        row_peers.chain(col_peers).chain(box_peers)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
