//! FEN parsing and serialization for [`Board`].
//!
//! Only piece placement and the active color are kept. The castling, en
//! passant and clock fields may be omitted; when present they are checked for
//! well-formedness and then dropped.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let mut board = Board::empty(side_to_move);
        parse_placement(fields[0], &mut board)?;

        if let Some(&castling) = fields.get(2) {
            let well_formed = castling == "-"
                || (!castling.is_empty() && castling.chars().all(|c| "KQkq".contains(c)));
            if !well_formed {
                return Err(FenError::InvalidCastling {
                    found: castling.to_string(),
                });
            }
        }

        if let Some(&en_passant) = fields.get(3)
            && en_passant != "-"
            && Square::from_algebraic(en_passant).is_none()
        {
            return Err(FenError::InvalidEnPassant {
                found: en_passant.to_string(),
            });
        }

        for (index, field) in [(4, "halfmove clock"), (5, "fullmove number")] {
            if let Some(&counter) = fields.get(index)
                && counter.parse::<u16>().is_err()
            {
                return Err(FenError::InvalidMoveCounter {
                    field,
                    found: counter.to_string(),
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let row = 7 - rank_index as u8;
        let mut col: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: col + 1,
                    });
                }
                board.put(Square::from_coords(row, col as u8), piece);
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }

    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0u8..8).rev() {
            let mut empty_count = 0u8;
            for col in 0u8..8 {
                match self.piece_at(Square::from_coords(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} - - 0 1", self.side_to_move())
    }
}
