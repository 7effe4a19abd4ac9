//! Turn Resolver.
//!
//! [`resolve_turn`] is a pure, total function: both committed moves, both
//! modifier sets and both combatant snapshots go in, a [`TurnResult`] comes
//! out. Nothing is mutated here; the state machine applies the result.
//!
//! Resolution order:
//!
//! 1. stun gating (entering stunned, or a round-opening stun from the opponent)
//! 2. block-disable gating (a disabled block is a failed block)
//! 3. outcome lookup on the effective moves
//! 4. counter-hit detection
//! 5. raw damage from base, character and archetype, reduced when staggered
//! 6. surge damage modifiers
//! 7. guard reduction, skipped on bypass and replaced by the shatter bonus
//! 8. defender's surge defense (immunity, reduction, reflection)
//! 9. guard meter, which a bypassed guard does not build
//! 10. energy
//! 11. hp
//! 12. status for the next turn

use crate::fixed::Bps;

pub mod damage;
pub mod guard;
pub mod resolve;
pub mod result;

pub use damage::raw_damage;
pub use guard::{GuardUpdate, update_guard};
pub use resolve::{Combatant, TurnClock, resolve_turn};
pub use result::{SideResult, StatusEffect, StatusEffects, TurnResult};

/// Guard meter break threshold.
pub const GUARD_MAX: u32 = 100;
/// Guard gained by every successful guard.
pub const GUARD_BUILDUP: u32 = 10;
/// Extra guard gained when the guard absorbed a punch or kick.
pub const GUARD_ABSORB_BONUS: u32 = 15;
/// Damage the guarder takes when its meter breaks.
pub const GUARD_BREAK_DAMAGE: u32 = 10;

/// Damage multiplier for a special that shatters a guard.
pub const SHATTER_MULTIPLIER: Bps = Bps::new(15_000);
/// Fraction of damage lost on the turn after being staggered.
pub const STAGGER_PENALTY: Bps = Bps::percent(25);
/// Fraction of a kick's damage returned to the kicker by a guard.
pub const KICK_REFLECT: Bps = Bps::percent(50);
