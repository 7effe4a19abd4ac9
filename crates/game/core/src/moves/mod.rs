//! Move Catalog.
//!
//! Pure lookup tables: move identifiers with their base damage and energy
//! cost, the fixed 5×5 resolution matrix, and the counter-hit relation.
//! Nothing here reads character stats or modifiers, so the outcome class of
//! an exchange is fully determined by the move pair.

pub mod kind;
pub mod matrix;

pub use kind::{MoveStats, MoveType};
pub use matrix::{ResolutionOutcome, is_counter_hit, matrix_outcome};
