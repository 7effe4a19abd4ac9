use crate::error::ParseError;

/// Base numbers for a move before any character or surge modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveStats {
    pub damage: u32,
    pub energy_cost: u32,
}

impl MoveStats {
    pub const fn new(damage: u32, energy_cost: u32) -> Self {
        Self {
            damage,
            energy_cost,
        }
    }
}

/// The five move types.
///
/// The discriminant is the stable wire code consumed by the proof
/// transcript; codes `0..=3` match the on-chain move enum. Never reorder.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum MoveType {
    Punch = 0,
    Kick = 1,
    Block = 2,
    Special = 3,
    /// Pseudo-move assigned by the engine; never chosen by a player.
    Stunned = 4,
}

impl MoveType {
    /// Moves a player may submit.
    pub const SELECTABLE: [MoveType; 4] = [Self::Punch, Self::Kick, Self::Block, Self::Special];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Result<Self, ParseError> {
        match code {
            0 => Ok(Self::Punch),
            1 => Ok(Self::Kick),
            2 => Ok(Self::Block),
            3 => Ok(Self::Special),
            4 => Ok(Self::Stunned),
            other => Err(ParseError::UnknownMoveCode(other)),
        }
    }

    /// Parse a player submission. Rejects unknown names and `stunned`.
    pub fn parse_submission(name: &str) -> Result<Self, ParseError> {
        let parsed: Self = name
            .trim()
            .parse()
            .map_err(|_| ParseError::UnknownMove(name.to_string()))?;
        if parsed == Self::Stunned {
            return Err(ParseError::StunnedNotSelectable);
        }
        Ok(parsed)
    }

    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::Stunned)
    }

    /// Moves that can deal damage.
    pub const fn is_attack(self) -> bool {
        matches!(self, Self::Punch | Self::Kick | Self::Special)
    }

    /// Punch/kick class, scaled by the surge strike multiplier.
    pub const fn is_strike(self) -> bool {
        matches!(self, Self::Punch | Self::Kick)
    }

    pub const fn base_stats(self) -> MoveStats {
        match self {
            Self::Punch => MoveStats::new(10, 0),
            Self::Kick => MoveStats::new(15, 20),
            Self::Block => MoveStats::new(0, 5),
            Self::Special => MoveStats::new(25, 50),
            Self::Stunned => MoveStats::new(0, 0),
        }
    }
}
