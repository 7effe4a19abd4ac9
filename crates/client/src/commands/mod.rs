//! Subcommands of the `brawl` binary.
mod cards;
mod content;
mod replay;
mod roster;

pub use cards::Cards;
pub use replay::Replay;
pub use roster::RosterCmd;
