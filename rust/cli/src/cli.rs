//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "twentyone",
    about = "Simplified twenty-one at a four-seat table: you against three bots",
    version
)]
pub struct TwentyoneCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one round against the three bot seats
    Play {
        /// RNG seed for the shoe and the bot policies (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Append a JSONL record of the finished round to this file
        #[arg(long)]
        log: Option<String>,
        /// Skip the LLM classifier and interpret input with keyword heuristics only
        #[arg(long)]
        no_llm: bool,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
    /// Sample card draws from the shoe to verify RNG properties
    Rng {
        /// Seed for the sampled shoe (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run environment diagnostics (classifier mode, config, locale)
    Doctor,
}
