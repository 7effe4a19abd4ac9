//! Brawl command-line client.
//!
//! Replays scripted matches through the runtime and inspects game content.
//!
//! ```bash
//! # Replay a match with the built-in roster
//! cargo run -p brawl-client -- replay data/demo.ron
//!
//! # Same match, custom content, JSON report
//! cargo run -p brawl-client -- replay data/demo.ron --data-dir data --format json
//! ```
//!
//! Log verbosity follows `RUST_LOG`; logs go to stderr so reports can be piped.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Cards, Replay, RosterCmd};
use config::ClientConfig;

/// Two-player fighting match resolver
#[derive(Parser)]
#[command(name = "brawl")]
#[command(about = "Replay and inspect brawl matches", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a scripted match
    Replay(Replay),

    /// List characters
    Roster(RosterCmd),

    /// List surge cards
    Cards(Cards),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = ClientConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay(cmd) => cmd.execute(&client).await,
        Command::Roster(cmd) => cmd.execute(&client),
        Command::Cards(cmd) => cmd.execute(),
    }
}
