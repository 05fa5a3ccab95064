//! Core chess types for taper: pieces, squares, attack geometry, and the
//! board capability the evaluator reads from.

mod attacks;
mod bitboard;
mod board;
mod color;
mod error;
mod fen;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use attacks::{
    between, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, piece_attacks,
    queen_attacks, rook_attacks,
};
pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
