//! End-to-end tests over synthetic games.

use oncourt_engine::{TrackError, track_game};
use oncourt_model::{
    Action, GameId, GameRecord, IssueKind, PersonId, PlayerRecord, QuarterStatus, TeamId,
    TeamRecord,
};

const HOME: i64 = 100;
const AWAY: i64 = 200;

fn player(id: i64, first: &str, family: &str, minutes: &str) -> PlayerRecord {
    PlayerRecord {
        person_id: PersonId::new(id),
        first_name: first.to_string(),
        family_name: family.to_string(),
        display_name: None,
        jersey: None,
        position: Some("G".to_string()),
        minutes: Some(minutes.to_string()),
    }
}

fn on_court_action(number: u64, period: u32, clock: &str, team: i64, person: i64) -> Action {
    Action {
        action_number: number,
        period,
        clock: clock.to_string(),
        team_id: Some(TeamId::new(team)),
        person_id: Some(PersonId::new(person)),
        player_name: None,
        action_type: "Rebound".to_string(),
        description: "Rebound".to_string(),
    }
}

fn substitution(
    number: u64,
    period: u32,
    clock: &str,
    team: i64,
    out_id: i64,
    description: &str,
) -> Action {
    Action {
        action_number: number,
        period,
        clock: clock.to_string(),
        team_id: Some(TeamId::new(team)),
        person_id: Some(PersonId::new(out_id)),
        player_name: None,
        action_type: "Substitution".to_string(),
        description: description.to_string(),
    }
}

/// One-period game: ten starters, one home substitution at elapsed 300s
/// (Foster in for Adams).
fn synthetic_game(actions: Vec<Action>) -> GameRecord {
    GameRecord {
        game_id: GameId::new("SYN01").expect("valid id"),
        home: TeamRecord {
            team_id: TeamId::new(HOME),
            name: Some("Home".to_string()),
            players: vec![
                player(1, "Alpha", "Adams", "30:00"),
                player(2, "Ben", "Baker", "32:00"),
                player(3, "Cal", "Carter", "31:00"),
                player(4, "Dan", "Dunn", "29:00"),
                player(5, "Ed", "Ellis", "28:00"),
                player(6, "Frank", "Foster", "18:00"),
                player(7, "Gus", "Grant", "04:00"),
            ],
        },
        away: TeamRecord {
            team_id: TeamId::new(AWAY),
            name: Some("Away".to_string()),
            players: vec![
                player(11, "Hugo", "Hall", "33:00"),
                player(12, "Ian", "Irving", "32:00"),
                player(13, "Jack", "Jones", "31:00"),
                player(14, "Kyle", "King", "30:00"),
                player(15, "Liam", "Lowe", "29:00"),
                player(16, "Max", "Moore", "15:00"),
                player(17, "Ned", "Nash", "10:00"),
            ],
        },
        actions,
    }
}

fn one_period_actions() -> Vec<Action> {
    let mut actions = Vec::new();
    // On-court traces for the other four home starters and all five away
    // starters; Adams is identified as a starter by his outgoing sub.
    let mut number = 1;
    for person in [2, 3, 4, 5] {
        actions.push(on_court_action(number, 1, "PT11M00.00S", HOME, person));
        number += 1;
    }
    for person in [11, 12, 13, 14, 15] {
        actions.push(on_court_action(number, 1, "PT10M30.00S", AWAY, person));
        number += 1;
    }
    actions.push(substitution(
        number,
        1,
        "PT07M00.00S",
        HOME,
        1,
        "SUB: Foster FOR Adams",
    ));
    actions
}

#[test]
fn one_substitution_produces_exactly_two_snapshots() {
    let game = synthetic_game(one_period_actions());
    let outcome = track_game(&game).expect("tracking succeeds");

    assert_eq!(outcome.lineups.len(), 2);
    let initial = &outcome.lineups[0];
    let after = &outcome.lineups[1];

    assert_eq!(initial.elapsed_seconds, 0.0);
    assert!(initial.home_players.contains(&PersonId::new(1)));
    assert!(!initial.home_players.contains(&PersonId::new(6)));

    assert_eq!(after.elapsed_seconds, 300.0);
    let slot = initial
        .home_players
        .iter()
        .position(|&id| id == PersonId::new(1))
        .expect("Adams starts");
    assert_eq!(after.home_players[slot], PersonId::new(6));
    // The other nine players are unchanged, in place.
    for (index, &id) in initial.home_players.iter().enumerate() {
        if index != slot {
            assert_eq!(after.home_players[index], id);
        }
    }
    assert_eq!(after.away_players, initial.away_players);
}

#[test]
fn substitution_list_matches_the_log() {
    let game = synthetic_game(one_period_actions());
    let outcome = track_game(&game).expect("tracking succeeds");

    assert_eq!(outcome.substitutions.len(), 1);
    let event = &outcome.substitutions[0];
    assert_eq!(event.player_out, PersonId::new(1));
    assert_eq!(event.player_in, PersonId::new(6));
    assert_eq!(event.elapsed_seconds, 300.0);
    assert_eq!(event.team_id, TeamId::new(HOME));
}

#[test]
fn every_snapshot_holds_the_lineup_invariants() {
    let game = synthetic_game(one_period_actions());
    let outcome = track_game(&game).expect("tracking succeeds");
    for state in &outcome.lineups {
        state.check_invariants().expect("five distinct, disjoint sides");
    }
}

#[test]
fn elapsed_seconds_never_decreases() {
    let mut actions = one_period_actions();
    let next = actions.last().expect("actions exist").action_number + 1;
    // A second period with a substitution of its own.
    for (offset, person) in [2, 3, 4, 5, 6].into_iter().enumerate() {
        actions.push(on_court_action(next + offset as u64, 2, "PT11M00.00S", HOME, person));
    }
    for (offset, person) in [11, 12, 13, 14, 15].into_iter().enumerate() {
        actions.push(on_court_action(next + 5 + offset as u64, 2, "PT10M00.00S", AWAY, person));
    }
    actions.push(substitution(
        next + 10,
        2,
        "PT03M00.00S",
        AWAY,
        11,
        "SUB: Moore FOR Hall",
    ));
    let game = synthetic_game(actions);
    let outcome = track_game(&game).expect("tracking succeeds");
    for pair in outcome.lineups.windows(2) {
        assert!(pair[1].elapsed_seconds >= pair[0].elapsed_seconds);
    }
}

#[test]
fn tracking_is_deterministic() {
    let game = synthetic_game(one_period_actions());
    let first = track_game(&game).expect("tracking succeeds");
    let second = track_game(&game).expect("tracking succeeds");
    assert_eq!(first.lineups, second.lineups);
    assert_eq!(first.substitutions, second.substitutions);
    assert_eq!(first.report, second.report);
}

#[test]
fn unresolvable_incoming_name_drops_the_event() {
    let mut actions = one_period_actions();
    let next = actions.last().expect("actions exist").action_number + 1;
    actions.push(substitution(
        next,
        1,
        "PT05M00.00S",
        HOME,
        2,
        "SUB: Nobody FOR Baker",
    ));
    let game = synthetic_game(actions);
    let outcome = track_game(&game).expect("tracking succeeds");
    // Only the Foster/Adams event survives.
    assert_eq!(outcome.substitutions.len(), 1);
    assert_eq!(outcome.report.count_of(IssueKind::UnresolvedSubstitution), 1);
}

#[test]
fn out_of_lineup_substitution_is_a_recorded_no_op() {
    let mut actions = one_period_actions();
    let next = actions.last().expect("actions exist").action_number + 1;
    // Adams already left at the seven-minute mark; subbing him out again
    // must not change state.
    actions.push(substitution(
        next,
        1,
        "PT05M00.00S",
        HOME,
        1,
        "SUB: Grant FOR Adams",
    ));
    let game = synthetic_game(actions);
    let outcome = track_game(&game).expect("tracking succeeds");
    assert_eq!(outcome.report.count_of(IssueKind::SubOutNotOnCourt), 1);
    // The no-op still emits a snapshot, identical to the one before it.
    assert_eq!(outcome.lineups.len(), 3);
    assert_eq!(
        outcome.lineups[2].home_players,
        outcome.lineups[1].home_players
    );
}

#[test]
fn directional_inference_classifies_quarters() {
    let game = synthetic_game(one_period_actions());
    let roster = {
        let mut report =
            oncourt_model::TrackReport::new(GameId::new("SYN01").expect("valid id"));
        oncourt_engine::Roster::build(&game, &mut report).expect("roster builds")
    };
    let boundaries = oncourt_engine::boundaries::scan(&game.actions);
    let mut report = oncourt_model::TrackReport::new(GameId::new("SYN01").expect("valid id"));
    let substitutions = oncourt_engine::subs::parse_substitutions(&game, &roster, &mut report);
    let patterns =
        oncourt_engine::quarters::classify_quarters(&game, &roster, &substitutions, &boundaries);

    // Adams: only an outgoing event, so he started the quarter.
    assert_eq!(
        patterns[&(1, PersonId::new(1))].status,
        QuarterStatus::Started
    );
    // Foster: only an incoming event, so he began on the bench.
    assert_eq!(
        patterns[&(1, PersonId::new(6))].status,
        QuarterStatus::Benched
    );
    // Baker: no substitutions but on-court traces.
    assert_eq!(
        patterns[&(1, PersonId::new(2))].status,
        QuarterStatus::PlayedFull
    );
    // Nash: no substitutions and no traces.
    assert_eq!(
        patterns[&(1, PersonId::new(17))].status,
        QuarterStatus::Benched
    );
}

#[test]
fn point_query_returns_the_snapshot_in_effect() {
    let game = synthetic_game(one_period_actions());
    let outcome = track_game(&game).expect("tracking succeeds");

    // Before the substitution: Adams on court.
    let before = outcome
        .players_on_court(1, "PT09M00.00S")
        .expect("valid clock")
        .expect("timeline non-empty");
    assert!(before.home_players.iter().any(|p| p.id == PersonId::new(1)));

    // At the substitution instant and after: Foster on court.
    let after = outcome
        .players_on_court(1, "PT07M00.00S")
        .expect("valid clock")
        .expect("timeline non-empty");
    assert!(after.home_players.iter().any(|p| p.id == PersonId::new(6)));
    assert!(
        after
            .home_players
            .iter()
            .any(|p| p.display_name == "Frank Foster")
    );

    // Before tip-off: defaults to the first snapshot.
    let pregame = outcome
        .players_on_court(1, "PT12M00.00S")
        .expect("valid clock")
        .expect("timeline non-empty");
    assert_eq!(pregame.elapsed_seconds, 0.0);
}

#[test]
fn roster_smaller_than_five_fails_rather_than_emitting() {
    let mut game = synthetic_game(one_period_actions());
    game.home.players.truncate(3);
    let error = track_game(&game).expect_err("cannot build a five");
    assert!(matches!(error, TrackError::Lineup(_)), "{error}");
}

#[test]
fn timeline_shape_snapshot() {
    let game = synthetic_game(one_period_actions());
    let outcome = track_game(&game).expect("tracking succeeds");
    let shape: Vec<(u32, String)> = outcome
        .lineups
        .iter()
        .map(|state| (state.period, state.clock.clone()))
        .collect();
    insta::assert_json_snapshot!("timeline_shape", shape);
}
