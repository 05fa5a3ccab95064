//! Per-call snapshot of the position being evaluated.

use taper_core::{Bitboard, Color, Piece, PieceKind, Position, Square};

use crate::eval::phase::game_phase;

/// Everything the evaluator reads from a [`Position`], gathered once.
///
/// The position is walked a single time into a mailbox, so the later passes
/// (attack map, threats, mobility) see a fixed square order regardless of the
/// order the position yields its pieces in.
#[derive(Debug, Clone)]
pub struct EvalContext {
    side_to_move: Color,
    squares: [Option<Piece>; Square::COUNT],
    occupied: Bitboard,
    counts: [u32; Piece::COUNT],
    phase: i32,
}

impl EvalContext {
    pub fn new<P: Position>(position: &P) -> EvalContext {
        let mut squares = [None; Square::COUNT];
        let mut occupied = Bitboard::EMPTY;
        for (sq, piece) in position.pieces() {
            squares[sq.index()] = Some(piece);
            occupied = occupied.with(sq);
        }

        let mut counts = [0; Piece::COUNT];
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                counts[piece.index()] = position.count(piece);
            }
        }

        EvalContext {
            side_to_move: position.side_to_move(),
            squares,
            occupied,
            counts,
            phase: game_phase(position),
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Game phase in `0..=PHASE_MAX`.
    #[inline]
    pub fn phase(&self) -> i32 {
        self.phase
    }

    /// Occupied squares in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied
            .into_iter()
            .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    #[inline]
    pub fn count(&self, kind: PieceKind, color: Color) -> u32 {
        self.counts[Piece::new(kind, color).index()]
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces_of(color)
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use taper_core::{Board, Color, Piece, PieceKind, Square};

    use super::EvalContext;

    #[test]
    fn snapshot_of_starting_position() {
        let ctx = EvalContext::new(&Board::starting_position());
        assert_eq!(ctx.side_to_move(), Color::White);
        assert_eq!(ctx.occupied().count(), 32);
        assert_eq!(ctx.piece_at(Square::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(ctx.piece_at(Square::D4), None);
        assert_eq!(ctx.count(PieceKind::Pawn, Color::Black), 8);
        assert_eq!(ctx.count(PieceKind::Bishop, Color::White), 2);
        assert_eq!(ctx.king_square(Color::Black), Some(Square::E8));
        assert_eq!(ctx.phase(), 0);
    }

    #[test]
    fn pieces_come_in_square_order() {
        let ctx = EvalContext::new(&Board::starting_position());
        let squares: Vec<Square> = ctx.pieces().map(|(sq, _)| sq).collect();
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ctx.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn missing_king_has_no_square() {
        let mut board = Board::starting_position();
        board.remove(Square::E1);
        let ctx = EvalContext::new(&board);
        assert_eq!(ctx.king_square(Color::White), None);
    }
}
