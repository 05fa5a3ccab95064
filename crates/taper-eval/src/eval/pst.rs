//! Piece-square tables.
//!
//! Tables are written from White's side as `[row][col]` grids, row 0 being
//! rank 1. Black's tables are the same grids with the rows reversed, built at
//! compile time, so both colors index their table with the square's absolute
//! row and column.

use taper_core::{Color, Piece, PieceKind, Square};

use crate::eval::score::{Score, Stage};

/// An 8×8 grid of positional bonuses indexed by `[row][col]`.
pub type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK: Table = [
    [  0,   0,   0,   5,   5,   0,   0,   0],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [  0,   5,   5,   5,   5,   5,   5,   0],
];

#[rustfmt::skip]
const QUEEN: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

/// King in the opening: shelter behind the pawns.
#[rustfmt::skip]
const KING_OPENING: Table = [
    [ 20,  30,  10,   0,   0,  10,  30,  20],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
];

/// King in the endgame: centralize.
#[rustfmt::skip]
const KING_ENDGAME: Table = [
    [-50, -30, -30, -30, -30, -30, -30, -50],
    [-30, -30,   0,   0,   0,   0, -30, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -20, -10,   0,   0, -10, -20, -30],
    [-50, -40, -30, -20, -20, -30, -40, -50],
];

const fn mirror_rows(table: &Table) -> Table {
    let mut mirrored = [[0; 8]; 8];
    let mut row = 0;
    while row < 8 {
        mirrored[row] = table[7 - row];
        row += 1;
    }
    mirrored
}

/// White tables in [`PieceKind::index()`] order, king entry for the opening.
static WHITE: [Table; PieceKind::COUNT] = [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING_OPENING];

static BLACK: [Table; PieceKind::COUNT] = [
    mirror_rows(&PAWN),
    mirror_rows(&KNIGHT),
    mirror_rows(&BISHOP),
    mirror_rows(&ROOK),
    mirror_rows(&QUEEN),
    mirror_rows(&KING_OPENING),
];

static BLACK_KING_ENDGAME: Table = mirror_rows(&KING_ENDGAME);

/// The table for a piece kind and color. Only the king's table depends on
/// `stage`.
pub fn table(kind: PieceKind, color: Color, stage: Stage) -> &'static Table {
    match (kind, color, stage) {
        (PieceKind::King, Color::White, Stage::Endgame) => &KING_ENDGAME,
        (PieceKind::King, Color::Black, Stage::Endgame) => &BLACK_KING_ENDGAME,
        (_, Color::White, _) => &WHITE[kind.index()],
        (_, Color::Black, _) => &BLACK[kind.index()],
    }
}

/// Positional bonus for `piece` standing on `sq`.
#[inline]
pub fn pst_value(piece: Piece, sq: Square, stage: Stage) -> Score {
    let grid = table(piece.kind(), piece.color(), stage);
    Score::from(grid[usize::from(sq.row())][usize::from(sq.col())])
}
