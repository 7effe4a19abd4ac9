/// Match format: how many round wins end the match.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchFormat {
    /// Best of one.
    Bo1,
    /// Best of three.
    #[default]
    Bo3,
    /// Best of five.
    Bo5,
}

impl MatchFormat {
    pub const fn rounds_to_win(self) -> u32 {
        match self {
            Self::Bo1 => 1,
            Self::Bo3 => 2,
            Self::Bo5 => 3,
        }
    }
}

/// Match configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub format: MatchFormat,

    /// Turn ceiling per round. When reached, the side with the strictly
    /// higher HP percentage takes the round.
    #[cfg_attr(feature = "serde", serde(default = "MatchConfig::default_max_turns"))]
    pub max_turns_per_round: u32,
}

impl MatchConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 10;
    pub const SELECTABLE_MOVES: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS_PER_ROUND: u32 = 20;

    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            max_turns_per_round: Self::DEFAULT_MAX_TURNS_PER_ROUND,
        }
    }

    pub fn with_max_turns(mut self, max_turns_per_round: u32) -> Self {
        // A zero ceiling would end every round before a single exchange.
        self.max_turns_per_round = max_turns_per_round.max(1);
        self
    }

    #[cfg(feature = "serde")]
    fn default_max_turns() -> u32 {
        Self::DEFAULT_MAX_TURNS_PER_ROUND
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(MatchFormat::default())
    }
}
