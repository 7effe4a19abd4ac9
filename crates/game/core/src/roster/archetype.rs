use crate::fixed::Bps;

/// Character class. The four archetypes form a counter cycle:
/// Speed → Tech → Tank → Precision → Speed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    Speed,
    Tank,
    Tech,
    Precision,
}

impl Archetype {
    /// Attack bonus when the attacker's archetype counters the defender's.
    pub const COUNTER_BONUS: Bps = Bps::new(12_000);

    /// The archetype this one counters.
    pub const fn counters(self) -> Archetype {
        match self {
            Self::Speed => Self::Tech,
            Self::Tech => Self::Tank,
            Self::Tank => Self::Precision,
            Self::Precision => Self::Speed,
        }
    }

    /// Damage multiplier for `attacker` hitting `defender`.
    pub const fn multiplier_against(attacker: Archetype, defender: Archetype) -> Bps {
        if attacker.counters() as u8 == defender as u8 {
            Self::COUNTER_BONUS
        } else {
            Bps::ONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Archetype::*;

    #[test]
    fn counter_cycle() {
        assert_eq!(Archetype::multiplier_against(Speed, Tech), Bps::new(12_000));
        assert_eq!(Archetype::multiplier_against(Tech, Tank), Bps::new(12_000));
        assert_eq!(Archetype::multiplier_against(Tank, Precision), Bps::new(12_000));
        assert_eq!(Archetype::multiplier_against(Precision, Speed), Bps::new(12_000));
    }

    #[test]
    fn reverse_and_mirror_are_neutral() {
        assert_eq!(Archetype::multiplier_against(Tech, Speed), Bps::ONE);
        assert_eq!(Archetype::multiplier_against(Speed, Tank), Bps::ONE);
        assert_eq!(Archetype::multiplier_against(Tank, Tank), Bps::ONE);
    }
}
