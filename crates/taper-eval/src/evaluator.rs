//! The interface a search uses to score positions.

use taper_core::Position;

use crate::eval::score::{INFINITY, MATE, STALEMATE, Score};
use crate::eval::values::PAWN_VALUE;

/// Static evaluation seen from a search.
///
/// Scores are relative to the side to move. The constant accessors let a
/// search size its window and recognize mate and draw scores without
/// depending on a particular evaluator's numbers.
pub trait Evaluator<P: Position>: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, position: &P) -> Score;

    /// Bound above any score `evaluate` or a search can produce.
    fn infinity(&self) -> Score {
        INFINITY
    }

    fn mate(&self) -> Score {
        MATE
    }

    fn stalemate(&self) -> Score {
        STALEMATE
    }

    fn pawn_value(&self) -> Score {
        PAWN_VALUE
    }
}

/// The tapered hand-crafted evaluator. Holds no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaperedEval;

impl<P: Position> Evaluator<P> for TaperedEval {
    fn name(&self) -> &'static str {
        "tapered"
    }

    fn evaluate(&self, position: &P) -> Score {
        crate::eval::evaluate(position)
    }
}
