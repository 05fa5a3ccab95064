//! Precomputed leaper attack tables and the between-squares table.

use crate::bitboard::Bitboard;
use crate::color::Color;

#[rustfmt::skip]
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-1, -2), (1, -2), (2, -1),
    (2, 1), (1, 2), (-1, 2), (-2, 1),
];

#[rustfmt::skip]
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const fn on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

const fn bit(row: i8, col: i8) -> u64 {
    1u64 << (row as usize * 8 + col as usize)
}

/// Build a 64-entry table of the on-board targets of a fixed set of (row, col) deltas.
const fn leaper_table<const N: usize>(deltas: [(i8, i8); N]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let row = (sq / 8) as i8;
        let col = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < N {
            let r = row + deltas[d].0;
            let c = col + deltas[d].1;
            if on_board(r, c) {
                bits |= bit(r, c);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Pawn captures for both colors, indexed by [`Color::index()`]: one row
/// forward in the pawn's direction and one column to either side.
const fn compute_pawn_attacks() -> [[Bitboard; 64]; 2] {
    let white = Color::White.pawn_step();
    let black = Color::Black.pawn_step();
    [
        leaper_table([(white, -1), (white, 1)]),
        leaper_table([(black, -1), (black, 1)]),
    ]
}

const fn signum(x: i8) -> i8 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

const fn compute_between() -> [[Bitboard; 64]; 64] {
    let mut table = [[Bitboard::EMPTY; 64]; 64];
    let mut s1 = 0usize;
    while s1 < 64 {
        let mut s2 = 0usize;
        while s2 < 64 {
            let (r1, c1) = ((s1 / 8) as i8, (s1 % 8) as i8);
            let (r2, c2) = ((s2 / 8) as i8, (s2 % 8) as i8);
            let (dr, dc) = (r2 - r1, c2 - c1);
            let aligned = s1 != s2 && (dr == 0 || dc == 0 || dr == dc || dr == -dc);
            if aligned {
                let (step_r, step_c) = (signum(dr), signum(dc));
                let mut bits = 0u64;
                let mut r = r1 + step_r;
                let mut c = c1 + step_c;
                while r != r2 || c != c2 {
                    bits |= bit(r, c);
                    r += step_r;
                    c += step_c;
                }
                table[s1][s2] = Bitboard::new(bits);
            }
            s2 += 1;
        }
        s1 += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(KNIGHT_DELTAS);
pub(crate) static KING_ATTACKS: [Bitboard; 64] = leaper_table(KING_DELTAS);
pub(crate) static PAWN_ATTACKS: [[Bitboard; 64]; 2] = compute_pawn_attacks();
pub(crate) static BETWEEN: [[Bitboard; 64]; 64] = compute_between();
