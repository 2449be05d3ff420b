//! Command implementations.

use anyhow::{Context, Result};

use oncourt_engine::{TrackOutcome, track_game};
use oncourt_model::GameRecord;

use crate::cli::{QueryArgs, SubsArgs, TimelineArgs};
use crate::summary;

fn load_and_track(path: &std::path::Path) -> Result<(GameRecord, TrackOutcome)> {
    let game = oncourt_ingest::read_game(path)
        .with_context(|| format!("failed to load game from {}", path.display()))?;
    let outcome = track_game(&game)
        .with_context(|| format!("failed to track game {}", game.game_id))?;
    Ok((game, outcome))
}

/// Returns whether the outcome's report contains errors.
pub fn run_timeline(args: &TimelineArgs) -> Result<bool> {
    let (game, outcome) = load_and_track(&args.game_file)?;
    if args.json {
        let json =
            serde_json::to_string_pretty(&outcome).context("failed to serialize outcome")?;
        println!("{json}");
    } else {
        summary::print_timeline(&game, &outcome);
        summary::print_report(&outcome.report);
    }
    Ok(outcome.report.has_errors())
}

pub fn run_subs(args: &SubsArgs) -> Result<bool> {
    let (_, outcome) = load_and_track(&args.game_file)?;
    summary::print_substitutions(&outcome);
    summary::print_report(&outcome.report);
    Ok(outcome.report.has_errors())
}

pub fn run_query(args: &QueryArgs) -> Result<bool> {
    let (_, outcome) = load_and_track(&args.game_file)?;
    let on_court = outcome
        .players_on_court(args.period, &args.clock)
        .with_context(|| format!("invalid clock {:?}", args.clock))?;
    match on_court {
        Some(on_court) => summary::print_on_court(&on_court),
        None => println!("timeline is empty; no lineup to report"),
    }
    Ok(outcome.report.has_errors())
}
