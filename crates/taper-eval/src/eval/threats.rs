//! Attack, defense and pin relationships between pieces.
//!
//! An [`AttackMap`] is built once per evaluation: it holds every piece's
//! attacked squares, the union per color, and the cheapest attacker each color
//! has on every square. The per-piece terms below are then plain lookups.
//!
//! Each piece is judged against the current board only. No exchange sequence
//! is played out, so a piece attacked twice and defended once counts the same
//! as one attacked once and defended once.

use taper_core::{Bitboard, Color, Piece, PieceKind, Square, between, piece_attacks};

use crate::eval::context::EvalContext;
use crate::eval::score::Score;
use crate::eval::values::{
    ATTACK_BONUS_MULTIPLIER, HANGING_MULTIPLIER, KING_ATTACK_BONUS, OUTNUMBERED_MULTIPLIER,
    UNDEFENDED_TARGET_MULTIPLIER, piece_value,
};

/// Attacked squares of every piece on the board, computed once per call.
#[derive(Debug, Clone)]
pub struct AttackMap<'a> {
    ctx: &'a EvalContext,
    /// Squares attacked by the piece on each square, empty for empty squares.
    from: [Bitboard; Square::COUNT],
    by_color: [Bitboard; Color::COUNT],
    /// Value of the cheapest piece of each color attacking each square.
    cheapest: [[Option<Score>; Square::COUNT]; Color::COUNT],
}

impl<'a> AttackMap<'a> {
    pub fn new(ctx: &'a EvalContext) -> AttackMap<'a> {
        let occupied = ctx.occupied();
        let mut from = [Bitboard::EMPTY; Square::COUNT];
        let mut by_color = [Bitboard::EMPTY; Color::COUNT];
        let mut cheapest: [[Option<Score>; Square::COUNT]; Color::COUNT] =
            [[None; Square::COUNT]; Color::COUNT];

        for (sq, piece) in ctx.pieces() {
            let attacks = piece_attacks(piece, sq, occupied);
            let color = piece.color().index();
            let value = piece_value(piece.kind());

            from[sq.index()] = attacks;
            by_color[color] |= attacks;
            for target in attacks {
                let slot = &mut cheapest[color][target.index()];
                if slot.is_none_or(|current| value < current) {
                    *slot = Some(value);
                }
            }
        }

        AttackMap {
            ctx,
            from,
            by_color,
            cheapest,
        }
    }

    /// The position snapshot this map was built from.
    #[inline]
    pub fn context(&self) -> &'a EvalContext {
        self.ctx
    }

    #[inline]
    pub fn attacks_from(&self, sq: Square) -> Bitboard {
        self.from[sq.index()]
    }

    #[inline]
    pub fn attacked_by(&self, color: Color) -> Bitboard {
        self.by_color[color.index()]
    }

    #[inline]
    pub fn is_attacked_by(&self, color: Color, sq: Square) -> bool {
        self.attacked_by(color).contains(sq)
    }

    /// Value of the cheapest piece of `color` attacking `sq`.
    #[inline]
    pub fn cheapest_attacker(&self, color: Color, sq: Square) -> Option<Score> {
        self.cheapest[color.index()][sq.index()]
    }
}

/// Tactical exposure of one piece. Penalties are magnitudes: the owning side
/// loses their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreatReport {
    /// Cheapest enemy piece attacking the square.
    pub cheapest_attacker: Option<Score>,
    /// Cheapest friendly piece defending the square.
    pub cheapest_defender: Option<Score>,
    /// Attacked and undefended: the piece's value × [`HANGING_MULTIPLIER`].
    pub hanging_penalty: Score,
    /// Defended, but the cheapest attacker is worth less than the piece.
    pub outnumbered_penalty: Score,
    /// The plain value gap to a cheaper attacker, defended or not.
    pub exposure_penalty: Score,
}

impl ThreatReport {
    #[inline]
    pub fn is_attacked(&self) -> bool {
        self.cheapest_attacker.is_some()
    }

    #[inline]
    pub fn is_defended(&self) -> bool {
        self.cheapest_defender.is_some()
    }

    #[inline]
    pub fn total_penalty(&self) -> Score {
        self.hanging_penalty + self.outnumbered_penalty + self.exposure_penalty
    }
}

/// Judge how exposed the piece on `sq` is. An empty square has no exposure.
pub fn analyze(map: &AttackMap<'_>, sq: Square) -> ThreatReport {
    let Some(piece) = map.context().piece_at(sq) else {
        return ThreatReport::default();
    };
    let value = piece_value(piece.kind());
    let cheapest_attacker = map.cheapest_attacker(!piece.color(), sq);
    let cheapest_defender = map.cheapest_attacker(piece.color(), sq);

    let mut report = ThreatReport {
        cheapest_attacker,
        cheapest_defender,
        ..ThreatReport::default()
    };

    let Some(attacker) = cheapest_attacker else {
        return report;
    };

    if cheapest_defender.is_none() {
        report.hanging_penalty = value * HANGING_MULTIPLIER;
    } else if attacker < value {
        report.outnumbered_penalty = (value - attacker) * OUTNUMBERED_MULTIPLIER;
    }
    if attacker < value {
        report.exposure_penalty = value - attacker;
    }

    report
}

/// The enemy piece pinned to its own king by the slider on `sq`, if any.
///
/// The pinned piece is the only piece between the slider and the enemy king
/// along one of the slider's lines. A second piece of either color on that
/// line means no pin.
pub fn pinned_by(map: &AttackMap<'_>, sq: Square) -> Option<(Square, Piece)> {
    let ctx = map.context();
    let slider = ctx.piece_at(sq)?;
    if !slider.kind().is_slider() {
        return None;
    }

    let king_sq = ctx.king_square(!slider.color())?;
    if !piece_attacks(slider, sq, Bitboard::EMPTY).contains(king_sq) {
        return None;
    }

    let blockers = between(sq, king_sq) & ctx.occupied();
    if blockers.count() != 1 {
        return None;
    }
    let pinned_sq = blockers.lsb()?;
    let pinned = ctx.piece_at(pinned_sq)?;
    (pinned.color() != slider.color()).then_some((pinned_sq, pinned))
}

/// Bonus for the enemy pieces the piece on `sq` attacks.
///
/// For each attacked enemy piece:
/// - worth more than the attacker: target value × [`ATTACK_BONUS_MULTIPLIER`];
/// - capture incentive from [`capture_incentive`];
/// - the enemy king: a flat [`KING_ATTACK_BONUS`].
pub fn attack_bonus(map: &AttackMap<'_>, sq: Square) -> Score {
    let ctx = map.context();
    let Some(attacker) = ctx.piece_at(sq) else {
        return 0;
    };
    let attacker_value = piece_value(attacker.kind());

    let mut bonus = 0;
    for target_sq in map.attacks_from(sq) {
        let Some(target) = ctx.piece_at(target_sq) else {
            continue;
        };
        if target.color() == attacker.color() {
            continue;
        }

        let target_value = piece_value(target.kind());
        if attacker_value < target_value {
            bonus += target_value * ATTACK_BONUS_MULTIPLIER;
        }
        let defended = map.is_attacked_by(target.color(), target_sq);
        bonus += capture_incentive(attacker_value, target_value, defended);
        if target.kind() == PieceKind::King {
            bonus += KING_ATTACK_BONUS;
        }
    }
    bonus
}

/// Reward for having a capture available: twice the target's value when
/// nothing defends it, otherwise the material gained if the target is worth
/// more than the attacker.
#[inline]
pub fn capture_incentive(
    attacker_value: Score,
    target_value: Score,
    target_defended: bool,
) -> Score {
    if !target_defended {
        target_value * UNDEFENDED_TARGET_MULTIPLIER
    } else if attacker_value < target_value {
        target_value - attacker_value
    } else {
        0
    }
}
