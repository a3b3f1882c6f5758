//! The 4×8 board and its coordinates.
//!
//! Cells are addressed row-major from the top-left:
//!
//! ```text
//!        A  B  C  D  E  F  G  H
//!   1   (0,0)                (0,7)
//!   2
//!   3
//!   4   (3,0)                (3,7)
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::{DecodeError, DecodeResult};
use crate::piece::Piece;

/// Number of rows on the board.
pub const ROWS: usize = 4;
/// Number of columns on the board.
pub const COLS: usize = 8;

// =============================================================================
// Location
// =============================================================================

/// A board square, shown as column letter then 1-based row (`C3`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Location {
    row: u8,
    col: u8,
}

impl Location {
    /// Create a location from row (0-3) and column (0-7).
    #[inline]
    pub fn new(row: usize, col: usize) -> Location {
        assert!(row < ROWS && col < COLS, "location ({}, {}) is off the board", row, col);
        Location {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The neighbouring square `(dr, dc)` away, or `None` past the edge.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Location> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col) {
            Some(Location::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Iterate over all 32 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Location::new(row, col)))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Location {
    type Err = DecodeError;

    fn from_str(s: &str) -> DecodeResult<Location> {
        let invalid = || DecodeError::InvalidLocation(s.to_string());
        let mut chars = s.chars();
        let col = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if !('A'..='H').contains(&col) || !(1..=ROWS).contains(&row) {
            return Err(invalid());
        }
        Ok(Location::new(row - 1, col as usize - 'A' as usize))
    }
}

// =============================================================================
// Board
// =============================================================================

/// The content of every square of a game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Board([[Piece; COLS]; ROWS]);

impl Board {
    /// Create a board from a grid of pieces.
    pub const fn from_pieces(cells: [[Piece; COLS]; ROWS]) -> Board {
        Board(cells)
    }

    /// A board with every square face-down, as at the start of a game.
    pub const fn face_down() -> Board {
        Board([[Piece::FaceDown; COLS]; ROWS])
    }

    /// Build a board from Pao-style square descriptors ("Q", "p", ".", "?").
    pub fn from_descriptors<S: AsRef<str>>(rows: &[Vec<S>]) -> DecodeResult<Board> {
        if rows.len() != ROWS {
            return Err(DecodeError::BoardRows {
                expected: ROWS,
                got: rows.len(),
            });
        }
        let mut board = Board::default();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != COLS {
                return Err(DecodeError::BoardShape {
                    rows: ROWS,
                    cols: COLS,
                    row: r,
                    len: row.len(),
                });
            }
            for (c, descriptor) in row.iter().enumerate() {
                board.0[r][c] = Piece::from_descriptor(descriptor.as_ref())?;
            }
        }
        Ok(board)
    }

    /// The piece at (row, col). Panics off the board.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Piece {
        self.0[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, piece: Piece) {
        self.0[row][col] = piece;
    }

    /// Every square with its piece, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        Location::all().map(move |loc| (loc, self[loc]))
    }

    /// Every piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    /// The board as descriptor rows, the inverse of [`Board::from_descriptors`].
    pub fn to_descriptors(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|row| row.iter().map(|p| p.descriptor().to_string()).collect())
            .collect()
    }
}

impl Index<Location> for Board {
    type Output = Piece;

    #[inline]
    fn index(&self, loc: Location) -> &Piece {
        &self.0[loc.row()][loc.col()]
    }
}

impl IndexMut<Location> for Board {
    #[inline]
    fn index_mut(&mut self, loc: Location) -> &mut Piece {
        &mut self.0[loc.row()][loc.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for piece in row {
                write!(f, "{}", piece.descriptor())?;
            }
        }
        Ok(())
    }
}
