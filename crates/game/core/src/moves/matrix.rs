//! Resolution matrix and counter-hit relation.

use super::MoveType;

/// What happened to the acting side in one exchange.
///
/// `matrix_outcome(a, b)` and `matrix_outcome(b, a)` are looked up
/// independently; together they describe the whole exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionOutcome {
    /// The move landed.
    Hit,
    /// The move whiffed; the side is stunned next turn.
    Missed,
    /// The side blocked an incoming move.
    Guarding,
    /// The side could not act this turn.
    Stunned,
    /// The side was beaten to the punch; its damage is reduced next turn.
    Staggered,
    /// The move bounced off a guard back at the side.
    Reflected,
    /// The side broke through the opponent's guard.
    Shattered,
    /// Both sides chose the same move.
    Clash,
}

impl ResolutionOutcome {
    /// Whether an attacking move with this outcome connects with the opponent.
    pub const fn connects(self) -> bool {
        matches!(self, Self::Hit | Self::Clash | Self::Shattered)
    }
}

/// Canonical outcome table.
///
/// | my \ opp | Punch     | Kick      | Block     | Special   | Stunned  |
/// |----------|-----------|-----------|-----------|-----------|----------|
/// | Punch    | Clash     | Staggered | Hit       | Hit       | Hit      |
/// | Kick     | Hit       | Clash     | Reflected | Hit       | Hit      |
/// | Block    | Guarding  | Guarding  | Clash     | Staggered | Guarding |
/// | Special  | Missed    | Hit       | Shattered | Clash     | Hit      |
/// | Stunned  | Stunned   | Stunned   | Stunned   | Stunned   | Stunned  |
pub const fn matrix_outcome(my_move: MoveType, opponent_move: MoveType) -> ResolutionOutcome {
    use MoveType::*;
    use ResolutionOutcome as O;

    match (my_move, opponent_move) {
        (Stunned, _) => O::Stunned,

        (Punch, Punch) => O::Clash,
        (Punch, Kick) => O::Staggered,
        (Punch, Block | Special | Stunned) => O::Hit,

        (Kick, Kick) => O::Clash,
        (Kick, Block) => O::Reflected,
        (Kick, Punch | Special | Stunned) => O::Hit,

        (Block, Block) => O::Clash,
        (Block, Special) => O::Staggered,
        (Block, Punch | Kick | Stunned) => O::Guarding,

        (Special, Special) => O::Clash,
        (Special, Punch) => O::Missed,
        (Special, Block) => O::Shattered,
        (Special, Kick | Stunned) => O::Hit,
    }
}

/// Counter-hit relation, independent of the outcome matrix:
/// Punch beats Special, Kick beats Punch, Special beats Block.
pub const fn is_counter_hit(my_move: MoveType, opponent_move: MoveType) -> bool {
    matches!(
        (my_move, opponent_move),
        (MoveType::Punch, MoveType::Special)
            | (MoveType::Kick, MoveType::Punch)
            | (MoveType::Special, MoveType::Block)
    )
}
