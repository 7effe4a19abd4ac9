//! Probability gates behind a single injectable seam.
//!
//! Anything that can change hp, energy, guard or outcome on a roll goes
//! through [`DecisionSource`]. Authoritative code uses [`SeededDecisions`],
//! which derives every roll from the match id and the turn coordinates, so
//! independently running copies of a match agree bit for bit.

mod rng;
mod source;

pub use rng::{PcgRng, RngOracle, compute_seed};
pub use source::{
    DecisionContext, DecisionPurpose, DecisionSource, FixedDecisions, SeededDecisions,
};
