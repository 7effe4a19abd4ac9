//! Unseeded decision source for presentation-only matches.

use brawl_core::{Bps, DecisionContext, DecisionSource};
use rand::Rng;

/// Rolls from the thread-local RNG.
///
/// Results are not reproducible, so a match played with this source cannot
/// be checked against a transcript. Use it for local practice and bots only.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngDecisions;

impl DecisionSource for ThreadRngDecisions {
    fn roll_bps(&self, _ctx: DecisionContext) -> u32 {
        rand::thread_rng().gen_range(0..Bps::SCALE)
    }
}
