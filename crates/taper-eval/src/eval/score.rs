//! Score type, sentinel constants and opening/endgame pairs.

use std::fmt;

use crate::eval::phase::PHASE_MAX;

/// Side-relative evaluation score.
///
/// Raw side values carry the king's [`MATE`] value and threat penalties that
/// scale piece values by hundreds, so accumulation is done in 64 bits.
pub type Score = i64;

/// Larger than any score evaluation or search can produce.
pub const INFINITY: Score = 1_000_000;

/// Mate score. Also the king's material value.
pub const MATE: Score = 300_000;

pub const STALEMATE: Score = 0;

/// Distance below [`MATE`] within which a blended value counts as near-mate.
pub const MATE_WINDOW: Score = 1_000;

/// Subtracted from every final score whose blended player value is not
/// near-mate, keeping ordinary scores far below the mate range.
pub const MATE_OFFSET: Score = 3_000_000;

/// Which of the two raw valuations a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Opening,
    Endgame,
}

/// A pair of opening and endgame values, blended by game phase.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Tapered {
    pub opening: Score,
    pub endgame: Score,
}

impl Tapered {
    #[inline]
    pub const fn new(opening: Score, endgame: Score) -> Tapered {
        Tapered { opening, endgame }
    }

    /// Interpolate between the two components.
    ///
    /// `phase` runs from 0 (pure opening) to [`PHASE_MAX`] (pure endgame).
    /// Division truncates toward zero.
    #[inline]
    pub fn blend(self, phase: i32) -> Score {
        let phase = Score::from(phase);
        let max = Score::from(PHASE_MAX);
        (self.opening * (max - phase) + self.endgame * phase) / max
    }
}

impl fmt::Debug for Tapered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({}, {})", self.opening, self.endgame)
    }
}

impl fmt::Display for Tapered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opening {} / endgame {}", self.opening, self.endgame)
    }
}
