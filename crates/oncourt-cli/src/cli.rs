//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "oncourt",
    version,
    about = "Reconstruct who was on court at every moment of a basketball game",
    long_about = "Reconstruct per-team five-player lineups from a raw play-by-play\n\
                  action log and box-score statistics. Starting fives are inferred\n\
                  per quarter from substitution direction; official starting-lineup\n\
                  data is not trusted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconstruct and print the lineup timeline for a game.
    Timeline(TimelineArgs),

    /// List the substitution events parsed from the action log.
    Subs(SubsArgs),

    /// Show who was on court at a specific period and clock.
    Query(QueryArgs),
}

#[derive(Parser)]
pub struct TimelineArgs {
    /// Path to the decoded game JSON file.
    #[arg(value_name = "GAME_JSON")]
    pub game_file: PathBuf,

    /// Emit the full outcome as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SubsArgs {
    /// Path to the decoded game JSON file.
    #[arg(value_name = "GAME_JSON")]
    pub game_file: PathBuf,
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Path to the decoded game JSON file.
    #[arg(value_name = "GAME_JSON")]
    pub game_file: PathBuf,

    /// Period to query (1-4 regulation, 5+ overtime).
    #[arg(long)]
    pub period: u32,

    /// Countdown clock to query, e.g. PT05M30.00S.
    #[arg(long, value_name = "PT_CLOCK")]
    pub clock: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
