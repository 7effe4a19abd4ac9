/// One of the two combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::One, Side::Two];

    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}
