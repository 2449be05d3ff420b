//! Human-readable tables for tracked games.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use oncourt_engine::{OnCourt, TrackOutcome};
use oncourt_model::{GameRecord, IssueSeverity, PersonId, TrackReport};

pub fn print_timeline(game: &GameRecord, outcome: &TrackOutcome) {
    println!("Game: {}", game.game_id);
    let home_label = team_label(game.home.name.as_deref(), "Home");
    let away_label = team_label(game.away.name.as_deref(), "Away");

    let mut table = new_table(vec![
        header_cell("Period"),
        header_cell("Clock"),
        header_cell("Elapsed"),
        header_cell(&home_label),
        header_cell(&away_label),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for state in &outcome.lineups {
        table.add_row(vec![
            Cell::new(state.period),
            Cell::new(&state.clock),
            Cell::new(format!("{:.1}", state.elapsed_seconds)),
            Cell::new(join_names(outcome, &state.home_players)),
            Cell::new(join_names(outcome, &state.away_players)),
        ]);
    }
    println!("{table}");
}

pub fn print_substitutions(outcome: &TrackOutcome) {
    let mut table = new_table(vec![
        header_cell("Period"),
        header_cell("Clock"),
        header_cell("Team"),
        header_cell("Out"),
        header_cell("In"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for event in &outcome.substitutions {
        table.add_row(vec![
            Cell::new(event.period),
            Cell::new(&event.clock),
            Cell::new(event.team_id),
            Cell::new(outcome.roster.display_name(event.player_out)),
            Cell::new(outcome.roster.display_name(event.player_in)),
        ]);
    }
    println!("{table}");
}

pub fn print_on_court(on_court: &OnCourt) {
    println!(
        "Period {} at {} (elapsed {:.1}s):",
        on_court.period, on_court.clock, on_court.elapsed_seconds
    );
    let names = |players: &[oncourt_engine::CourtPlayer]| {
        players
            .iter()
            .map(|player| player.display_name.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("  {}: {}", on_court.home_team, names(&on_court.home_players));
    println!("  {}: {}", on_court.away_team, names(&on_court.away_players));
}

pub fn print_report(report: &TrackReport) {
    if report.issues.is_empty() {
        println!("No data issues.");
        return;
    }
    let mut table = new_table(vec![
        header_cell("Severity"),
        header_cell("Kind"),
        header_cell("Period"),
        header_cell("Action"),
        header_cell("Message"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for issue in &report.issues {
        let severity = match issue.severity {
            IssueSeverity::Error => Cell::new("error").fg(Color::Red),
            IssueSeverity::Warning => Cell::new("warning").fg(Color::Yellow),
        };
        table.add_row(vec![
            severity,
            Cell::new(format!("{:?}", issue.kind)),
            option_cell(issue.period),
            option_cell(issue.action_number),
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
    println!(
        "{} warning(s), {} error(s).",
        report.warning_count(),
        report.error_count()
    );
}

fn join_names(outcome: &TrackOutcome, players: &[PersonId; 5]) -> String {
    players
        .iter()
        .map(|&id| outcome.roster.display_name(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn team_label(name: Option<&str>, fallback: &str) -> String {
    name.unwrap_or(fallback).to_string()
}

fn new_table(header: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn option_cell<T: std::fmt::Display>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("-"),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
