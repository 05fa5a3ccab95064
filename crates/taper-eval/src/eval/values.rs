//! Material values and the fixed bonus/penalty weights.

use taper_core::PieceKind;

use crate::eval::score::{MATE, Score};

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = MATE;

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value  |
/// |--------|--------|
/// | Pawn   | 100    |
/// | Knight | 320    |
/// | Bishop | 330    |
/// | Rook   | 500    |
/// | Queen  | 900    |
/// | King   | `MATE` |
pub const PIECE_VALUES: [Score; PieceKind::COUNT] = [
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.index()]
}

/// Applied once when a side holds two or more knights.
pub const KNIGHT_PAIR_PENALTY: Score = -10;

/// Applied once when a side holds two or more rooks.
pub const ROOK_PAIR_PENALTY: Score = -20;

/// Applied when a side has no pawns left.
pub const NO_PAWNS_PENALTY: Score = -20;

/// Awarded to the side to move.
pub const TEMPO_BONUS: Score = 10;

// Indexed by the owning side's pawn count, 0..=8. Knights lose value as
// pawns come off the board and rooks gain it.

/// Per-knight adjustment.
pub const KNIGHT_PAWN_ADJUSTMENT: [Score; 9] = [-30, -20, -15, -10, -5, 0, 5, 10, 15];

/// Per-rook adjustment.
pub const ROOK_PAWN_ADJUSTMENT: [Score; 9] = [25, 20, 15, 10, 5, 0, -5, -10, -15];

/// Bonus for holding two or more bishops, applied once.
pub const BISHOP_PAIR_PAWN_ADJUSTMENT: [Score; 9] = [40, 40, 35, 30, 25, 20, 20, 15, 15];

/// Look up a pawn-count adjustment. Counts above eight (only possible on
/// hand-built boards) use the last entry.
#[inline]
pub fn pawn_adjustment(table: &[Score; 9], pawns: u32) -> Score {
    table[pawns.min(8) as usize]
}

// Threat weights.

/// Scales the value of a piece that is attacked and not defended.
pub const HANGING_MULTIPLIER: Score = 500;

/// Scales the gap between a defended piece and a cheaper attacker.
pub const OUTNUMBERED_MULTIPLIER: Score = 200;

/// Scales the value of an enemy piece attacked by something cheaper.
pub const ATTACK_BONUS_MULTIPLIER: Score = 10;

/// Scales the value of an attacked enemy piece that has no defender.
pub const UNDEFENDED_TARGET_MULTIPLIER: Score = 2;

/// Flat bonus per piece attacking the enemy king's square.
pub const KING_ATTACK_BONUS: Score = 150;

#[cfg(test)]
mod tests {
    use taper_core::PieceKind;

    use super::*;

    #[test]
    fn base_values() {
        assert_eq!(piece_value(PieceKind::Pawn), 100);
        assert_eq!(piece_value(PieceKind::Knight), 320);
        assert_eq!(piece_value(PieceKind::Bishop), 330);
        assert_eq!(piece_value(PieceKind::Rook), 500);
        assert_eq!(piece_value(PieceKind::Queen), 900);
        assert_eq!(piece_value(PieceKind::King), MATE);
    }

    #[test]
    fn values_strictly_increase_by_kind() {
        for pair in PIECE_VALUES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn adjustments_are_neutral_at_five_pawns() {
        assert_eq!(pawn_adjustment(&KNIGHT_PAWN_ADJUSTMENT, 5), 0);
        assert_eq!(pawn_adjustment(&ROOK_PAWN_ADJUSTMENT, 5), 0);
        assert_eq!(pawn_adjustment(&BISHOP_PAIR_PAWN_ADJUSTMENT, 5), 20);
    }

    #[test]
    fn adjustment_clamps_pawn_count() {
        assert_eq!(pawn_adjustment(&KNIGHT_PAWN_ADJUSTMENT, 8), 15);
        assert_eq!(pawn_adjustment(&KNIGHT_PAWN_ADJUSTMENT, 12), 15);
        assert_eq!(pawn_adjustment(&ROOK_PAWN_ADJUSTMENT, 0), 25);
    }
}
