//! The 9×9 sudoku board.
//!
//! A [`Board`] stores one `u8` per cell, `0` meaning empty. The type is
//! `Copy`, so every assignment or function-call argument is an independent
//! snapshot; observers can hold onto a board value without ever seeing the
//! solver's later mutations.

use std::fmt::{self, Display, Write as _};
use std::str::FromStr;

use crate::{DigitSet, Pos};

/// A 9×9 grid of cells, each holding `0` (empty) or a digit 1-9.
///
/// # Examples
///
/// ```
/// use stepdoku_core::{Board, Pos};
///
/// let mut board = Board::empty();
/// assert_eq!(board.get(Pos::new(0, 0)), 0);
///
/// board.set(Pos::new(0, 0), 7);
/// assert_eq!(board.get(Pos::new(0, 0)), 7);
///
/// board.clear(Pos::new(0, 0));
/// assert!(board.is_blank(Pos::new(0, 0)));
/// ```
///
/// # Textual interchange
///
/// Boards parse from and render to a 81-cell text form, `.` (or `0`) for
/// empty cells, whitespace ignored:
///
/// ```
/// use stepdoku_core::Board;
///
/// let text = "\
///     53..7....\n6..195...\n.98....6.\n8...6...3\n4..8.3..1\n\
///     7...2...6\n.6....28.\n...419..5\n....8..79";
/// let board: Board = text.parse()?;
/// assert_eq!(board.to_string(), text);
/// # Ok::<(), stepdoku_core::BoardImportError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; 9]; 9],
}

/// Errors rejecting malformed board imports.
///
/// Malformed input is rejected as a whole; no cells of a partially parsed
/// board are ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardImportError {
    /// The nested grid does not have exactly 9 rows.
    #[display("expected 9 rows, got {rows}")]
    WrongRowCount {
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row of the nested grid does not have exactly 9 cells.
    #[display("row {row} has {cols} cells, expected 9")]
    WrongRowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        cols: usize,
    },
    /// A cell value is outside the range 0-9.
    #[display("cell {pos} holds {value}, expected 0-9")]
    ValueOutOfRange {
        /// Coordinate of the offending cell.
        pos: Pos,
        /// The rejected value.
        value: u8,
    },
    /// A textual board does not contain exactly 81 cell characters.
    #[display("expected 81 cell characters, got {count}")]
    WrongCellCount {
        /// Number of cell characters supplied.
        count: usize,
    },
    /// A textual board contains a character that is not a cell or whitespace.
    #[display("invalid cell character {ch:?}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
    },
}

impl Board {
    /// Creates a board with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Creates a board from a fixed-size grid, validating cell ranges.
    ///
    /// # Errors
    ///
    /// Returns [`BoardImportError::ValueOutOfRange`] if any cell holds a
    /// value greater than 9.
    pub fn from_grid(cells: [[u8; 9]; 9]) -> Result<Self, BoardImportError> {
        for pos in Pos::all() {
            let value = cells[usize::from(pos.row())][usize::from(pos.col())];
            if value > 9 {
                return Err(BoardImportError::ValueOutOfRange { pos, value });
            }
        }
        Ok(Self { cells })
    }

    /// Creates a board from a nested grid of rows, validating shape and
    /// cell ranges.
    ///
    /// This is the structural import boundary: callers handing over plain
    /// nested numeric data (e.g. deserialized from an interchange format)
    /// go through here.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not 9 rows of 9 cells or if any cell
    /// holds a value greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepdoku_core::{Board, BoardImportError};
    ///
    /// let rows = vec![vec![0u8; 9]; 9];
    /// assert_eq!(Board::from_rows(&rows), Ok(Board::empty()));
    ///
    /// let short = vec![vec![0u8; 9]; 8];
    /// assert_eq!(
    ///     Board::from_rows(&short),
    ///     Err(BoardImportError::WrongRowCount { rows: 8 })
    /// );
    /// ```
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardImportError> {
        if rows.len() != 9 {
            return Err(BoardImportError::WrongRowCount { rows: rows.len() });
        }
        let mut cells = [[0; 9]; 9];
        for (row, values) in rows.iter().enumerate() {
            if values.len() != 9 {
                return Err(BoardImportError::WrongRowLength {
                    row,
                    cols: values.len(),
                });
            }
            cells[row].copy_from_slice(values);
        }
        Self::from_grid(cells)
    }

    /// Exports the board as a nested grid of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    /// Returns the value at `pos`: `0` if empty, otherwise a digit 1-9.
    #[must_use]
    pub fn get(&self, pos: Pos) -> u8 {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Places a digit at `pos`, overwriting any previous value.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9. Use [`Board::clear`] to
    /// empty a cell.
    pub fn set(&mut self, pos: Pos, digit: u8) {
        assert!(
            (1..=9).contains(&digit),
            "digit must be between 1 and 9, got {digit}"
        );
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = digit;
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Pos) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = 0;
    }

    /// Returns `true` if the cell at `pos` is empty.
    #[must_use]
    pub fn is_blank(&self, pos: Pos) -> bool {
        self.get(pos) == 0
    }

    /// Returns the coordinates of all empty cells in row-major order.
    #[must_use]
    pub fn blanks(&self) -> Vec<Pos> {
        Pos::all().filter(|&pos| self.is_blank(pos)).collect()
    }

    /// Returns `true` if no cell is empty.
    ///
    /// Completeness says nothing about rule validity; see
    /// [`Board::is_valid`].
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Pos::all().all(|pos| !self.is_blank(pos))
    }

    /// Computes the legal digits for the cell at `pos`.
    ///
    /// Returns `{1..9}` minus the digits already present in the cell's row,
    /// column, and 3×3 box, the cell's own value included. Empty cells
    /// contribute nothing (0 is not a digit). Pure: the board is not
    /// modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepdoku_core::{Board, DigitSet, Pos};
    ///
    /// let mut board = Board::empty();
    /// assert_eq!(board.candidates(Pos::new(4, 4)), DigitSet::FULL);
    ///
    /// board.set(Pos::new(4, 0), 1); // same row
    /// board.set(Pos::new(0, 4), 2); // same column
    /// board.set(Pos::new(3, 3), 3); // same box
    /// assert_eq!(
    ///     board.candidates(Pos::new(4, 4)),
    ///     DigitSet::from_iter([4, 5, 6, 7, 8, 9])
    /// );
    /// ```
    #[must_use]
    pub fn candidates(&self, pos: Pos) -> DigitSet {
        let mut seen = DigitSet::EMPTY;
        let own = self.get(pos);
        if own != 0 {
            seen.insert(own);
        }
        for peer in pos.peers() {
            let value = self.get(peer);
            if value != 0 {
                seen.insert(value);
            }
        }
        DigitSet::FULL.difference(seen)
    }

    /// Checks the board against the sudoku rules.
    ///
    /// Returns `true` only if every cell holds a digit 1-9 and no digit
    /// repeats within any row, column, or 3×3 box. Empty cells make the
    /// board invalid; nothing ever panics. Calling this any number of times
    /// on an unmodified board yields the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepdoku_core::Board;
    ///
    /// assert!(!Board::empty().is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let rows_ok = (0..9).all(|row| self.house_is_valid((0..9).map(move |col| Pos::new(row, col))));
        let cols_ok = (0..9).all(|col| self.house_is_valid((0..9).map(move |row| Pos::new(row, col))));
        let boxes_ok = (0..9).all(|index| {
            let origin = Pos::new(index / 3 * 3, index % 3 * 3);
            self.house_is_valid(
                (0..9).map(move |i| Pos::new(origin.row() + i / 3, origin.col() + i % 3)),
            )
        });
        rows_ok && cols_ok && boxes_ok
    }

    fn house_is_valid(&self, cells: impl Iterator<Item = Pos>) -> bool {
        let mut seen = DigitSet::EMPTY;
        for pos in cells {
            let value = self.get(pos);
            if !(1..=9).contains(&value) || seen.contains(value) {
                return false;
            }
            seen.insert(value);
        }
        true
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for &value in cells {
                let ch = if value == 0 {
                    '.'
                } else {
                    char::from(b'0' + value)
                };
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(81);
        for ch in s.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            let value = match ch {
                '.' => 0,
                '0'..='9' => {
                    // ASCII digit, always fits in u8.
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    value
                }
                _ => return Err(BoardImportError::InvalidCharacter { ch }),
            };
            values.push(value);
        }
        if values.len() != 81 {
            return Err(BoardImportError::WrongCellCount { count: values.len() });
        }
        let mut cells = [[0; 9]; 9];
        for (pos, value) in Pos::all().zip(values) {
            cells[usize::from(pos.row())][usize::from(pos.col())] = value;
        }
        Ok(Self { cells })
    }
}
