//! Tapered static evaluation.
//!
//! Each side gets two raw valuations, one with the opening piece-square
//! tables and one with the endgame tables. Both include material, pawn-count
//! adjustments, threats and pins, so they differ only where the tables do.
//! The two are blended by game phase, and the blended values are combined
//! with weighted mobility into a single score relative to the side to move.

pub mod context;
pub mod drawish;
pub mod material;
pub mod mobility;
pub mod phase;
pub mod pst;
pub mod score;
pub mod threats;
pub mod values;

use std::fmt;

use taper_core::{Color, PieceKind, Position};
use tracing::trace;

use self::context::EvalContext;
use self::drawish::low_material_guard;
use self::material::{MaterialCount, imbalance, pawn_count_adjustment};
use self::mobility::{mobility, mobility_delta};
use self::phase::PHASE_MAX;
use self::pst::pst_value;
use self::score::{MATE, MATE_OFFSET, MATE_WINDOW, Score, Stage, Tapered};
use self::threats::{AttackMap, analyze, attack_bonus, pinned_by};
use self::values::{TEMPO_BONUS, piece_value};

/// Raw value of one side for one stage, before blending.
///
/// Sums, over the side's pieces, base value, piece-square bonus, pawn-count
/// adjustment, pin bonus, threat penalties and attack bonus. Then adds the
/// whole-side material terms and the tempo bonus if `color` is to move, and
/// finally applies [`low_material_guard`].
pub fn side_value(map: &AttackMap<'_>, color: Color, stage: Stage) -> Score {
    let ctx = map.context();
    let own = MaterialCount::of(ctx, color);

    let mut value = 0;
    for (sq, piece) in ctx.pieces_of(color) {
        value += piece_value(piece.kind()) + pst_value(piece, sq, stage);
        value += pawn_count_adjustment(piece.kind(), own.pawns);
        if let Some((_, pinned)) = pinned_by(map, sq) {
            value += piece_value(pinned.kind());
        }
        value -= analyze(map, sq).total_penalty();
        value += attack_bonus(map, sq);
    }

    value += imbalance(own);
    if color == ctx.side_to_move() {
        value += TEMPO_BONUS;
    }

    low_material_guard(value, own, ctx.count(PieceKind::Pawn, !color))
}

/// Opening and endgame raw values of one side.
pub fn raw_value(map: &AttackMap<'_>, color: Color) -> Tapered {
    Tapered::new(
        side_value(map, color, Stage::Opening),
        side_value(map, color, Stage::Endgame),
    )
}

/// Every intermediate of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    /// The side to move; the score is from its point of view.
    pub player: Color,
    pub phase: i32,
    pub player_raw: Tapered,
    pub opponent_raw: Tapered,
    pub player_blended: Score,
    pub opponent_blended: Score,
    pub player_mobility: u32,
    pub opponent_mobility: u32,
    /// `(player_mobility - opponent_mobility) * MOBILITY_WEIGHT`.
    pub mobility_delta: Score,
    /// Whether [`MATE_OFFSET`] was subtracted.
    pub offset_applied: bool,
    pub score: Score,
}

impl Breakdown {
    fn compute<P: Position>(position: &P) -> Breakdown {
        let ctx = EvalContext::new(position);
        let map = AttackMap::new(&ctx);
        let player = ctx.side_to_move();
        let opponent = !player;
        let phase = ctx.phase();

        let player_raw = raw_value(&map, player);
        let opponent_raw = raw_value(&map, opponent);
        let player_blended = player_raw.blend(phase);
        let opponent_blended = opponent_raw.blend(phase);

        let player_mobility = mobility(&map, player);
        let opponent_mobility = mobility(&map, opponent);
        let mobility_delta = mobility_delta(&map, player);

        let offset_applied = player_blended < MATE - MATE_WINDOW;
        let mut score = player_blended + mobility_delta - opponent_blended;
        if offset_applied {
            score -= MATE_OFFSET;
        }

        Breakdown {
            player,
            phase,
            player_raw,
            opponent_raw,
            player_blended,
            opponent_blended,
            player_mobility,
            opponent_mobility,
            mobility_delta,
            offset_applied,
            score,
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = self.player.name();
        let opponent = (!self.player).name();
        writeln!(f, "side to move     {player}")?;
        writeln!(f, "phase            {} / {PHASE_MAX}", self.phase)?;
        writeln!(f, "{player:<6} raw       {}", self.player_raw)?;
        writeln!(f, "{opponent:<6} raw       {}", self.opponent_raw)?;
        writeln!(f, "{player:<6} blended   {}", self.player_blended)?;
        writeln!(f, "{opponent:<6} blended   {}", self.opponent_blended)?;
        writeln!(
            f,
            "mobility         {} vs {} ({:+})",
            self.player_mobility, self.opponent_mobility, self.mobility_delta
        )?;
        let offset = if self.offset_applied { "applied" } else { "not applied" };
        writeln!(f, "mate offset      {offset}")?;
        write!(f, "score            {}", self.score)
    }
}

/// Score `position` from the side to move's point of view.
///
/// Pure and total for any position with one king per side; safe to call from
/// many threads at once.
pub fn evaluate<P: Position>(position: &P) -> Score {
    Breakdown::compute(position).score
}

/// Evaluate `position` and return every intermediate value.
///
/// Always agrees with [`evaluate`] on the final score.
pub fn breakdown<P: Position>(position: &P) -> Breakdown {
    let breakdown = Breakdown::compute(position);
    trace!(
        player = breakdown.player.name(),
        phase = breakdown.phase,
        player_blended = breakdown.player_blended,
        opponent_blended = breakdown.opponent_blended,
        mobility_delta = breakdown.mobility_delta,
        offset_applied = breakdown.offset_applied,
        score = breakdown.score,
        "evaluated position"
    );
    breakdown
}
