//! Per-side piece counts and the material terms that depend on them.

use taper_core::{Color, PieceKind};

use crate::eval::context::EvalContext;
use crate::eval::score::Score;
use crate::eval::values::{
    BISHOP_PAIR_PAWN_ADJUSTMENT, KNIGHT_PAIR_PENALTY, KNIGHT_PAWN_ADJUSTMENT, NO_PAWNS_PENALTY,
    ROOK_PAIR_PENALTY, ROOK_PAWN_ADJUSTMENT, pawn_adjustment,
};

/// How many of each non-king piece one side holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialCount {
    pub pawns: u32,
    pub knights: u32,
    pub bishops: u32,
    pub rooks: u32,
    pub queens: u32,
}

impl MaterialCount {
    pub fn of(ctx: &EvalContext, color: Color) -> MaterialCount {
        MaterialCount {
            pawns: ctx.count(PieceKind::Pawn, color),
            knights: ctx.count(PieceKind::Knight, color),
            bishops: ctx.count(PieceKind::Bishop, color),
            rooks: ctx.count(PieceKind::Rook, color),
            queens: ctx.count(PieceKind::Queen, color),
        }
    }

    /// No bishops, rooks or queens.
    #[inline]
    pub fn only_knights(&self) -> bool {
        self.bishops == 0 && self.rooks == 0 && self.queens == 0
    }
}

/// Adjustment for one piece of `kind` given its side's pawn count. Knights
/// are worth less and rooks more as the pawns disappear.
#[inline]
pub fn pawn_count_adjustment(kind: PieceKind, pawns: u32) -> Score {
    match kind {
        PieceKind::Knight => pawn_adjustment(&KNIGHT_PAWN_ADJUSTMENT, pawns),
        PieceKind::Rook => pawn_adjustment(&ROOK_PAWN_ADJUSTMENT, pawns),
        PieceKind::Pawn | PieceKind::Bishop | PieceKind::Queen | PieceKind::King => 0,
    }
}

/// Whole-side terms: the bishop pair bonus, knight and rook pair penalties,
/// and the penalty for having no pawns.
pub fn imbalance(count: MaterialCount) -> Score {
    let mut score = 0;
    if count.bishops > 1 {
        score += pawn_adjustment(&BISHOP_PAIR_PAWN_ADJUSTMENT, count.pawns);
    }
    if count.knights > 1 {
        score += KNIGHT_PAIR_PENALTY;
    }
    if count.rooks > 1 {
        score += ROOK_PAIR_PENALTY;
    }
    if count.pawns == 0 {
        score += NO_PAWNS_PENALTY;
    }
    score
}
