//! Power surge cards and the modifier sets they produce.
//!
//! A card is an optional per-round selection. [`resolve_modifiers`] turns the
//! pair of selections into one [`ModifierSet`] per side, and the functions in
//! [`effects`] apply those sets during turn resolution.

mod card;
pub mod effects;
mod modifiers;
mod resolve;

pub use card::{SurgeCard, SurgeEffect};
pub use effects::{
    DefenseOutcome, EnergyEffects, apply_damage_modifiers, apply_defensive_modifiers,
    apply_energy_effects, apply_hp_effects, is_block_disabled, roll_dodge,
};
pub use modifiers::ModifierSet;
pub use resolve::resolve_modifiers;
