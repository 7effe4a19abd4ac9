//! List surge cards and what they do.

use anyhow::Result;
use clap::Parser;

use brawl_core::SurgeCard;

/// List every surge card
#[derive(Parser)]
pub struct Cards {}

impl Cards {
    pub fn execute(self) -> Result<()> {
        for card in SurgeCard::ALL {
            println!("{:>2}  {:<14} {:?}", card.code(), card.to_string(), card.effects());
        }
        Ok(())
    }
}
