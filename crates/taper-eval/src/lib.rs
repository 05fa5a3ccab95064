//! Tapered static evaluation for taper.

pub mod eval;
pub mod evaluator;

pub use eval::score::{INFINITY, MATE, STALEMATE, Score, Stage, Tapered};
pub use eval::{Breakdown, breakdown, evaluate};
pub use evaluator::{Evaluator, TaperedEval};
