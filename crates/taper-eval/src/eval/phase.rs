//! Game phase from the non-pawn material left on the board.

use taper_core::{PieceKind, Position};

/// Phase of a position with no knights, bishops, rooks or queens left.
pub const PHASE_MAX: i32 = 256;

/// Weighted material of the standard starting complement:
/// 4×1 + 4×1 + 4×2 + 2×4 = 24.
pub const TOTAL_PHASE: i32 = 24;

/// | Piece  | Weight |
/// |--------|--------|
/// | Knight | 1      |
/// | Bishop | 1      |
/// | Rook   | 2      |
/// | Queen  | 4      |
const PHASE_WEIGHTS: [(PieceKind, i32); 4] = [
    (PieceKind::Knight, 1),
    (PieceKind::Bishop, 1),
    (PieceKind::Rook, 2),
    (PieceKind::Queen, 4),
];

/// Calculate the game phase in `0..=PHASE_MAX`.
///
/// 0 is the full starting material, [`PHASE_MAX`] a king-and-pawn ending.
/// The value rises as pieces are traded and ignores pawns. Extra promoted
/// material cannot push it below zero.
pub fn game_phase<P: Position>(position: &P) -> i32 {
    let remaining: i32 = PHASE_WEIGHTS
        .iter()
        .map(|&(kind, weight)| position.count_kind(kind) as i32 * weight)
        .sum();

    let phase = ((TOTAL_PHASE - remaining) * PHASE_MAX + TOTAL_PHASE / 2) / TOTAL_PHASE;
    phase.clamp(0, PHASE_MAX)
}
