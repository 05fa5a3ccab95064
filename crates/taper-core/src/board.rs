//! A mailbox board: piece placement and side to move.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement plus the side to move.
///
/// Castling rights, en passant and move clocks play no part in static
/// evaluation and are not stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Piece on each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    /// Number of pieces on the board, indexed by [`Piece::index()`].
    counts: [u8; Piece::COUNT],
    side_to_move: Color,
}

impl Board {
    /// A board with no pieces.
    pub fn empty(side_to_move: Color) -> Board {
        Board {
            squares: [None; Square::COUNT],
            counts: [0; Piece::COUNT],
            side_to_move,
        }
    }

    /// The standard starting position, White to move.
    pub fn starting_position() -> Board {
        let mut board = Board::empty(Color::White);
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            board.put(Square::from_coords(0, col), Piece::new(kind, Color::White));
            board.put(Square::from_coords(1, col), Piece::WHITE_PAWN);
            board.put(Square::from_coords(6, col), Piece::BLACK_PAWN);
            board.put(Square::from_coords(7, col), Piece::new(kind, Color::Black));
        }
        board
    }

    /// Place `piece` on `sq`, returning whatever stood there before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let previous = self.remove(sq);
        self.squares[sq.index()] = Some(piece);
        self.counts[piece.index()] += 1;
        previous
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let previous = self.squares[sq.index()].take();
        if let Some(piece) = previous {
            self.counts[piece.index()] -= 1;
        }
        previous
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// The same placement with `color` to move.
    pub fn with_side_to_move(&self, color: Color) -> Board {
        let mut board = self.clone();
        board.side_to_move = color;
        board
    }

    /// Squares holding any piece.
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(|_| true)
    }

    /// Squares holding a piece of `color`.
    pub fn side(&self, color: Color) -> Bitboard {
        self.occupied_by(|piece| piece.color() == color)
    }

    fn occupied_by(&self, keep: impl Fn(Piece) -> bool) -> Bitboard {
        self.occupied_squares()
            .filter(|&(_, piece)| keep(piece))
            .map(|(sq, _)| sq)
            .collect()
    }

    fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Square of the king of `color`, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.occupied_squares()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Check the structural preconditions evaluation relies on.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = Position::count(self, Piece::new(PieceKind::King, color));
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawns_on_back_rank = self
            .occupied_squares()
            .any(|(sq, piece)| piece.kind() == PieceKind::Pawn && Bitboard::BACK_RANKS.contains(sq));
        if pawns_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Position for Board {
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_squares()
    }

    fn count(&self, piece: Piece) -> u32 {
        u32::from(self.counts[piece.index()])
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0u8..8).rev() {
            write!(f, "{}  ", row + 1)?;
            for col in 0u8..8 {
                let c = self
                    .0
                    .piece_at(Square::from_coords(row, col))
                    .map_or('.', Piece::fen_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(Square::G2), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.side(Color::Black).count(), 16);
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
    }

    #[test]
    fn counts_track_put_and_remove() {
        let mut board = Board::starting_position();
        assert_eq!(board.count(Piece::WHITE_KNIGHT), 2);
        assert_eq!(board.count_kind(PieceKind::Rook), 4);

        let captured = board.put(Square::B1, Piece::BLACK_QUEEN);
        assert_eq!(captured, Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.count(Piece::WHITE_KNIGHT), 1);
        assert_eq!(board.count(Piece::BLACK_QUEEN), 2);
        assert_eq!(board.count_kind(PieceKind::Queen), 3);

        assert_eq!(board.remove(Square::B1), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.remove(Square::B1), None);
        assert_eq!(board.count(Piece::BLACK_QUEEN), 1);
    }

    #[test]
    fn pieces_of_filters_by_color() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert!(board.pieces_of(Color::White).all(|(_, p)| p.color() == Color::White));
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = Board::starting_position();
        board.remove(Square::E8);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: "black", count: 0 })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let mut board = Board::starting_position();
        board.put(Square::A8, Piece::WHITE_PAWN);
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }

    #[test]
    fn with_side_to_move_keeps_placement() {
        let board = Board::starting_position();
        let flipped = board.with_side_to_move(Color::Black);
        assert_eq!(flipped.side_to_move(), Color::Black);
        assert_eq!(flipped.occupied(), board.occupied());
    }

    #[test]
    fn pretty_print() {
        let output = Board::starting_position().pretty().to_string();
        assert!(output.contains("r n b q k b n r"));
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
