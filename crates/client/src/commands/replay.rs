//! Replay a scripted match and report every turn.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use brawl_content::ScriptLoader;
use brawl_core::{MatchState, Side, SideResult, Transcript};
use brawl_runtime::{PlayedTurn, RuntimeConfig, Scenario};

use super::content::Content;
use crate::config::ClientConfig;

/// Replay a scripted match file
#[derive(Parser)]
pub struct Replay {
    /// Scripted match to play (RON)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Directory holding config.toml and roster.ron
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per turn plus round and match results
    Summary,
    /// Every played turn and the final state as JSON
    Json,
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    match_id: &'a str,
    turns: &'a [PlayedTurn],
    final_state: &'a MatchState,
    move_plans: [Vec<u8>; 2],
    transcript_root: String,
}

impl Replay {
    pub async fn execute(self, client: &ClientConfig) -> Result<()> {
        let script = ScriptLoader::load(&self.script)
            .with_context(|| format!("loading script {}", self.script.display()))?;
        let content = Content::load(self.data_dir.as_deref().or(client.data_dir.as_deref()))?;

        let mut config = RuntimeConfig::from_env();
        if let Some(match_config) = content.config.clone() {
            config.match_config = match_config;
        }

        let scenario = Scenario::new(script);
        let runtime = scenario
            .runtime_builder(config, content.roster())
            .build()
            .await?;
        let handle = runtime.handle();

        let played = scenario.replay(&handle).await?;
        let state = handle.query_state().await?;
        let transcript = handle.transcript().await?;

        drop(handle);
        runtime.shutdown().await?;

        match self.format {
            OutputFormat::Summary => print_summary(&played, &state, &transcript),
            OutputFormat::Json => {
                let report = ReplayReport {
                    match_id: &scenario.script().match_id,
                    turns: &played,
                    final_state: &state,
                    move_plans: Side::ALL.map(|side| transcript.move_plan(side)),
                    transcript_root: hex_root(&transcript),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Ok(())
    }
}

fn print_summary(played: &[PlayedTurn], state: &MatchState, transcript: &Transcript) {
    let [one, two] = &state.combatants;
    println!("{} vs {}", one.character_id, two.character_id);

    for turn in played {
        if let Some(round) = turn.round_started {
            println!("-- round {round} --");
        }
        let result = &turn.outcome.result;
        println!(
            "R{} T{:<2}  {}  |  {}",
            result.round,
            result.turn,
            describe(&result.sides[0], turn.forced[0]),
            describe(&result.sides[1], turn.forced[1]),
        );
        if let Some(summary) = &turn.round_summary {
            println!(
                "   round {} {:?} after {} turns (wins {}-{})",
                summary.round,
                summary.outcome,
                summary.turns_played,
                summary.rounds_won[0],
                summary.rounds_won[1],
            );
        }
    }

    match state.match_winner {
        Some(winner) => println!(
            "winner: {} ({})",
            winner,
            state.combatant(winner).character_id
        ),
        None => println!(
            "unfinished: round {} turn {}",
            state.current_round, state.current_turn
        ),
    }
    println!("transcript root: {}", hex_root(transcript));
}

fn describe(side: &SideResult, forced: bool) -> String {
    let mut line = format!(
        "{:<7} {:<10} dmg {:>3}  hp {:>3}  en {:>3}  guard {:>2}",
        side.effective_move.to_string(),
        side.outcome.to_string(),
        side.damage_dealt,
        side.hp,
        side.energy,
        side.guard_meter,
    );
    if forced {
        line.push_str(" [forced]");
    }
    for status in &side.status_effects {
        line.push_str(&format!(" +{status}"));
    }
    line
}

fn hex_root(transcript: &Transcript) -> String {
    hex::encode(transcript.root())
}
