//! Corrections for material that cannot force mate.

use crate::eval::material::MaterialCount;
use crate::eval::score::Score;
use crate::eval::values::BISHOP_VALUE;

/// Force a side's raw value to zero when its material cannot win.
///
/// Applied to each raw (opening and endgame) value after every additive term:
/// - no pawns and a value strictly between zero and a bishop's worth;
/// - a positive value from exactly two knights and a king, with no pawns on
///   either side.
pub fn low_material_guard(value: Score, own: MaterialCount, opponent_pawns: u32) -> Score {
    if own.pawns == 0 && value > 0 && value < BISHOP_VALUE {
        return 0;
    }
    if value > 0
        && own.pawns == 0
        && opponent_pawns == 0
        && own.knights == 2
        && own.only_knights()
    {
        return 0;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::low_material_guard;
    use crate::eval::material::MaterialCount;

    const TWO_KNIGHTS: MaterialCount = MaterialCount {
        pawns: 0,
        knights: 2,
        bishops: 0,
        rooks: 0,
        queens: 0,
    };

    #[test]
    fn small_pawnless_value_is_zeroed() {
        let bare = MaterialCount::default();
        assert_eq!(low_material_guard(1, bare, 3), 0);
        assert_eq!(low_material_guard(329, bare, 0), 0);
        assert_eq!(low_material_guard(330, bare, 0), 330);
        assert_eq!(low_material_guard(0, bare, 0), 0);
        assert_eq!(low_material_guard(-50, bare, 0), -50);
    }

    #[test]
    fn pawns_keep_small_values() {
        let one_pawn = MaterialCount {
            pawns: 1,
            ..MaterialCount::default()
        };
        assert_eq!(low_material_guard(120, one_pawn, 0), 120);
    }

    #[test]
    fn two_knights_without_pawns_is_zeroed() {
        assert_eq!(low_material_guard(300_500, TWO_KNIGHTS, 0), 0);
    }

    #[test]
    fn two_knights_survive_when_pawns_remain() {
        assert_eq!(low_material_guard(300_500, TWO_KNIGHTS, 1), 300_500);
        let with_pawn = MaterialCount {
            pawns: 1,
            ..TWO_KNIGHTS
        };
        assert_eq!(low_material_guard(300_500, with_pawn, 0), 300_500);
    }

    #[test]
    fn two_knights_plus_more_survive() {
        let with_rook = MaterialCount {
            rooks: 1,
            ..TWO_KNIGHTS
        };
        assert_eq!(low_material_guard(301_000, with_rook, 0), 301_000);
        let three = MaterialCount {
            knights: 3,
            ..TWO_KNIGHTS
        };
        assert_eq!(low_material_guard(301_000, three, 0), 301_000);
    }

    #[test]
    fn negative_two_knight_value_is_kept() {
        assert_eq!(low_material_guard(-400, TWO_KNIGHTS, 0), -400);
    }
}
