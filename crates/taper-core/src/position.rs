//! The read-only view of a position that evaluation depends on.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A chess position as seen by the evaluator.
///
/// Implementors own piece storage and legality; the evaluator only reads
/// through this trait. Iteration order of [`pieces`](Position::pieces) is
/// unspecified and must not influence any score derived from it.
pub trait Position {
    /// The side whose turn it is.
    fn side_to_move(&self) -> Color;

    /// Every piece on the board with its square.
    fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_;

    /// Pieces of one color with their squares.
    fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Number of pieces matching both kind and color.
    fn count(&self, piece: Piece) -> u32;

    /// Number of pieces of a kind, both colors combined.
    fn count_kind(&self, kind: PieceKind) -> u32 {
        Color::ALL
            .into_iter()
            .map(|color| self.count(Piece::new(kind, color)))
            .sum()
    }
}
