//! Board squares addressed by (row, col).
//!
//! Row 0 is White's back rank (rank 1) and col 0 is the a-file, so the
//! dense index `row * 8 + col` runs A1 = 0, B1 = 1, ..., H8 = 63.

use std::fmt;

use crate::bitboard::Bitboard;

/// A square on the 8×8 board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from row and column, both `0..8`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are on the board.
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Create a square from a dense index, returning `None` when out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file, rank] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::from_coords(rank - b'1', file - b'a'))
    }

    /// Dense index `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (rank index), 0 = rank 1.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Column (file index), 0 = a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// The square `d_row` rows and `d_col` columns away, or `None` off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square::from_coords(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The same column on the mirrored row (a1 <-> a8).
    #[inline]
    pub const fn flip_row(self) -> Square {
        Square(self.0 ^ 56)
    }

    /// Single-square bitboard.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square::from_coords(0, 0);
    pub const B1: Square = Square::from_coords(0, 1);
    pub const C1: Square = Square::from_coords(0, 2);
    pub const D1: Square = Square::from_coords(0, 3);
    pub const E1: Square = Square::from_coords(0, 4);
    pub const F1: Square = Square::from_coords(0, 5);
    pub const G1: Square = Square::from_coords(0, 6);
    pub const H1: Square = Square::from_coords(0, 7);
    pub const A2: Square = Square::from_coords(1, 0);
    pub const B2: Square = Square::from_coords(1, 1);
    pub const C2: Square = Square::from_coords(1, 2);
    pub const D2: Square = Square::from_coords(1, 3);
    pub const E2: Square = Square::from_coords(1, 4);
    pub const F2: Square = Square::from_coords(1, 5);
    pub const G2: Square = Square::from_coords(1, 6);
    pub const H2: Square = Square::from_coords(1, 7);
    pub const A3: Square = Square::from_coords(2, 0);
    pub const B3: Square = Square::from_coords(2, 1);
    pub const C3: Square = Square::from_coords(2, 2);
    pub const D3: Square = Square::from_coords(2, 3);
    pub const E3: Square = Square::from_coords(2, 4);
    pub const F3: Square = Square::from_coords(2, 5);
    pub const G3: Square = Square::from_coords(2, 6);
    pub const H3: Square = Square::from_coords(2, 7);
    pub const A4: Square = Square::from_coords(3, 0);
    pub const B4: Square = Square::from_coords(3, 1);
    pub const C4: Square = Square::from_coords(3, 2);
    pub const D4: Square = Square::from_coords(3, 3);
    pub const E4: Square = Square::from_coords(3, 4);
    pub const F4: Square = Square::from_coords(3, 5);
    pub const G4: Square = Square::from_coords(3, 6);
    pub const H4: Square = Square::from_coords(3, 7);
    pub const A5: Square = Square::from_coords(4, 0);
    pub const B5: Square = Square::from_coords(4, 1);
    pub const C5: Square = Square::from_coords(4, 2);
    pub const D5: Square = Square::from_coords(4, 3);
    pub const E5: Square = Square::from_coords(4, 4);
    pub const F5: Square = Square::from_coords(4, 5);
    pub const G5: Square = Square::from_coords(4, 6);
    pub const H5: Square = Square::from_coords(4, 7);
    pub const A6: Square = Square::from_coords(5, 0);
    pub const B6: Square = Square::from_coords(5, 1);
    pub const C6: Square = Square::from_coords(5, 2);
    pub const D6: Square = Square::from_coords(5, 3);
    pub const E6: Square = Square::from_coords(5, 4);
    pub const F6: Square = Square::from_coords(5, 5);
    pub const G6: Square = Square::from_coords(5, 6);
    pub const H6: Square = Square::from_coords(5, 7);
    pub const A7: Square = Square::from_coords(6, 0);
    pub const B7: Square = Square::from_coords(6, 1);
    pub const C7: Square = Square::from_coords(6, 2);
    pub const D7: Square = Square::from_coords(6, 3);
    pub const E7: Square = Square::from_coords(6, 4);
    pub const F7: Square = Square::from_coords(6, 5);
    pub const G7: Square = Square::from_coords(6, 6);
    pub const H7: Square = Square::from_coords(6, 7);
    pub const A8: Square = Square::from_coords(7, 0);
    pub const B8: Square = Square::from_coords(7, 1);
    pub const C8: Square = Square::from_coords(7, 2);
    pub const D8: Square = Square::from_coords(7, 3);
    pub const E8: Square = Square::from_coords(7, 4);
    pub const F8: Square = Square::from_coords(7, 5);
    pub const G8: Square = Square::from_coords(7, 6);
    pub const H8: Square = Square::from_coords(7, 7);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{}{}", file, self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
