//! Guard meter arithmetic.

use crate::moves::{MoveType, ResolutionOutcome};

use super::{GUARD_ABSORB_BONUS, GUARD_BUILDUP, GUARD_MAX};

/// New guard meter for one side after an exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardUpdate {
    pub meter: u32,
    pub delta: i32,
    /// The meter reached the break threshold and was reset.
    pub broken: bool,
    /// A special shattered the guard.
    pub shattered: bool,
}

/// `current` is this side's meter, `own` its outcome; `opponent` and
/// `opponent_move` describe the other side after dodge resolution.
pub fn update_guard(
    current: u32,
    own: ResolutionOutcome,
    opponent: ResolutionOutcome,
    opponent_move: MoveType,
) -> GuardUpdate {
    let current = current.min(GUARD_MAX - 1);

    if opponent == ResolutionOutcome::Shattered {
        return GuardUpdate {
            meter: 0,
            delta: -(current as i32),
            broken: false,
            shattered: true,
        };
    }

    if own != ResolutionOutcome::Guarding {
        return GuardUpdate {
            meter: current,
            ..GuardUpdate::default()
        };
    }

    let absorbed = opponent_move.is_strike() && opponent != ResolutionOutcome::Missed;
    let gain = GUARD_BUILDUP + if absorbed { GUARD_ABSORB_BONUS } else { 0 };
    let next = current + gain;

    if next >= GUARD_MAX {
        GuardUpdate {
            meter: 0,
            delta: -(current as i32),
            broken: true,
            shattered: false,
        }
    } else {
        GuardUpdate {
            meter: next,
            delta: gain as i32,
            broken: false,
            shattered: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ResolutionOutcome as O;

    #[test]
    fn guarding_a_strike_builds_more() {
        assert_eq!(update_guard(0, O::Guarding, O::Hit, MoveType::Punch).meter, 25);
        assert_eq!(update_guard(0, O::Guarding, O::Stunned, MoveType::Stunned).meter, 10);
        assert_eq!(update_guard(0, O::Guarding, O::Reflected, MoveType::Kick).meter, 25);
    }

    #[test]
    fn reaching_threshold_resets_to_zero() {
        let update = update_guard(75, O::Guarding, O::Hit, MoveType::Kick);
        assert!(update.broken);
        assert_eq!(update.meter, 0);
        assert_eq!(update.delta, -75);

        let under = update_guard(74, O::Guarding, O::Hit, MoveType::Kick);
        assert!(!under.broken);
        assert_eq!(under.meter, 99);
    }

    #[test]
    fn shatter_clears_without_break() {
        let update = update_guard(60, O::Staggered, O::Shattered, MoveType::Special);
        assert!(update.shattered);
        assert!(!update.broken);
        assert_eq!(update.meter, 0);
    }

    #[test]
    fn non_guarding_sides_keep_their_meter() {
        let update = update_guard(40, O::Hit, O::Clash, MoveType::Punch);
        assert_eq!(update.meter, 40);
        assert_eq!(update.delta, 0);
    }
}
