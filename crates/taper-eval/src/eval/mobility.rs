//! Piece mobility.
//!
//! Mobility here is the raw number of squares a side's pieces attack, pawns
//! and king included, counting squares held by friendly pieces. It is a
//! cheap activity measure rather than a count of legal moves.

use taper_core::Color;

use crate::eval::score::Score;
use crate::eval::threats::AttackMap;

/// Multiplier applied to the mobility difference between the two sides.
pub const MOBILITY_WEIGHT: Score = 2;

/// Sum of attacked-square counts over all pieces of `color`.
pub fn mobility(map: &AttackMap<'_>, color: Color) -> u32 {
    map.context()
        .pieces_of(color)
        .map(|(sq, _)| map.attacks_from(sq).count())
        .sum()
}

/// Weighted mobility difference, positive when `color` is the more active side.
pub fn mobility_delta(map: &AttackMap<'_>, color: Color) -> Score {
    let own = Score::from(mobility(map, color));
    let theirs = Score::from(mobility(map, !color));
    (own - theirs) * MOBILITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use taper_core::{Board, Color, Piece, Square};

    use super::{mobility, mobility_delta};
    use crate::eval::context::EvalContext;
    use crate::eval::threats::AttackMap;

    #[test]
    fn lone_rook_in_the_corner_sees_fourteen() {
        let mut board = Board::empty(Color::White);
        board.put(Square::A1, Piece::WHITE_ROOK);
        let ctx = EvalContext::new(&board);
        let map = AttackMap::new(&ctx);
        assert_eq!(mobility(&map, Color::White), 14);
        assert_eq!(mobility(&map, Color::Black), 0);
    }

    #[test]
    fn starting_position_is_balanced() {
        let ctx = EvalContext::new(&Board::starting_position());
        let map = AttackMap::new(&ctx);
        // Pawns 14, knights 6, the hemmed-in rest of the back rank 18.
        assert_eq!(mobility(&map, Color::White), 38);
        assert_eq!(mobility(&map, Color::Black), 38);
        assert_eq!(mobility_delta(&map, Color::White), 0);
    }

    #[test]
    fn friendly_blockers_still_count() {
        // Rook a1 sees its own a2 pawn, then b1 through the e1 king.
        let board: Board = "4k3/8/8/8/8/8/P7/R3K3 w - - 0 1".parse().unwrap();
        let ctx = EvalContext::new(&board);
        let map = AttackMap::new(&ctx);
        assert_eq!(map.attacks_from(Square::A1).count(), 5);
    }

    #[test]
    fn delta_is_weighted_and_antisymmetric() {
        let board: Board = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1".parse().unwrap();
        let ctx = EvalContext::new(&board);
        let map = AttackMap::new(&ctx);
        let white = mobility(&map, Color::White) as i64;
        let black = mobility(&map, Color::Black) as i64;
        assert_eq!(mobility_delta(&map, Color::White), (white - black) * 2);
        assert_eq!(mobility_delta(&map, Color::Black), -(white - black) * 2);
    }
}
