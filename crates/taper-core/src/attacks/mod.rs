//! Attacked-square enumeration for every piece kind.
//!
//! Leapers (pawn, knight, king) come from precomputed tables. Sliders walk
//! each of their directions square by square and stop on the first occupied
//! square, which is itself included: a slider sees its blocker, friend or foe,
//! but nothing behind it.

mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::tables::{BETWEEN, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

/// Rook directions as (row, col) steps.
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions as (row, col) steps.
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[rustfmt::skip]
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// The two diagonal squares one row forward for a pawn of `color`.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

fn slide(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(d_row, d_col) in directions {
        let mut cursor = sq.offset(d_row, d_col);
        while let Some(target) = cursor {
            attacks = attacks.with(target);
            if occupied.contains(target) {
                break;
            }
            cursor = target.offset(d_row, d_col);
        }
    }
    attacks
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, &DIAGONALS)
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, &ORTHOGONALS)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, &ALL_DIRECTIONS)
}

/// Squares attacked by `piece` standing on `sq`, given the board occupancy.
pub fn piece_attacks(piece: Piece, sq: Square, occupied: Bitboard) -> Bitboard {
    match piece.kind() {
        PieceKind::Pawn => pawn_attacks(piece.color(), sq),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::King => king_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
    }
}

/// Squares strictly between two squares on a shared rank, file or diagonal.
///
/// Empty when the squares are not aligned.
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index()][b.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_counts() {
        assert_eq!(knight_attacks(Square::E4).count(), 8);
        assert_eq!(knight_attacks(Square::A1).count(), 2);
        assert_eq!(knight_attacks(Square::B1).count(), 3);
    }

    #[test]
    fn king_counts() {
        assert_eq!(king_attacks(Square::E4).count(), 8);
        assert_eq!(king_attacks(Square::E1).count(), 5);
        assert_eq!(king_attacks(Square::H8).count(), 3);
    }

    #[test]
    fn pawns_capture_toward_the_enemy() {
        let white = pawn_attacks(Color::White, Square::E4);
        assert!(white.contains(Square::D5) && white.contains(Square::F5));
        let black = pawn_attacks(Color::Black, Square::E5);
        assert!(black.contains(Square::D4) && black.contains(Square::F4));
    }

    #[test]
    fn edge_pawns_do_not_wrap() {
        let attacks = pawn_attacks(Color::White, Square::A4);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.contains(Square::B5));
        let attacks = pawn_attacks(Color::Black, Square::H5);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.contains(Square::G4));
    }

    #[test]
    fn pawn_on_last_row_attacks_nothing() {
        assert!(pawn_attacks(Color::White, Square::C8).is_empty());
        assert!(pawn_attacks(Color::Black, Square::C1).is_empty());
    }

    #[test]
    fn rook_on_empty_board_sees_fourteen() {
        for sq in Square::all() {
            assert_eq!(rook_attacks(sq, Bitboard::EMPTY).count(), 14, "rook on {sq}");
        }
    }

    #[test]
    fn bishop_and_queen_on_empty_board() {
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
        assert_eq!(bishop_attacks(Square::A1, Bitboard::EMPTY).count(), 7);
        assert_eq!(queen_attacks(Square::D4, Bitboard::EMPTY).count(), 27);
    }

    #[test]
    fn sliders_include_blocker_but_not_beyond() {
        let occupied = Square::E6.bitboard() | Square::C2.bitboard();
        let rook = rook_attacks(Square::E4, occupied);
        assert!(rook.contains(Square::E5));
        assert!(rook.contains(Square::E6));
        assert!(!rook.contains(Square::E7));
        let bishop = bishop_attacks(Square::E4, occupied);
        assert!(bishop.contains(Square::C2));
        assert!(!bishop.contains(Square::B1));
    }

    #[test]
    fn piece_attacks_dispatches_on_kind() {
        let occ = Bitboard::EMPTY;
        assert_eq!(piece_attacks(Piece::WHITE_ROOK, Square::A1, occ).count(), 14);
        assert_eq!(piece_attacks(Piece::BLACK_KNIGHT, Square::A1, occ).count(), 2);
        assert_eq!(
            piece_attacks(Piece::BLACK_PAWN, Square::E5, occ),
            pawn_attacks(Color::Black, Square::E5)
        );
    }

    #[test]
    fn between_aligned_and_not() {
        let bb = between(Square::E1, Square::E4);
        assert_eq!(bb.count(), 2);
        assert!(bb.contains(Square::E2) && bb.contains(Square::E3));
        assert_eq!(between(Square::A1, Square::H8).count(), 6);
        assert_eq!(between(Square::B5, Square::E8).count(), 2);
        assert!(between(Square::A1, Square::B3).is_empty());
        assert!(between(Square::A1, Square::B2).is_empty());
    }
}
