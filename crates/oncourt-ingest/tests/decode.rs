//! Tests for the typed input boundary.

use oncourt_ingest::{IngestError, decode_game};
use serde_json::json;

fn valid_game() -> serde_json::Value {
    json!({
        "gameId": "0022300001",
        "homeTeam": {
            "teamId": 1610612760,
            "teamName": "Thunder",
            "players": [
                {
                    "personId": 1628983,
                    "firstName": "Shai",
                    "familyName": "Gilgeous-Alexander",
                    "jerseyNum": "2",
                    "position": "G",
                    "statistics": { "minutes": "35:12" }
                }
            ]
        },
        "awayTeam": {
            "teamId": 1610612743,
            "teamName": "Nuggets",
            "players": [
                {
                    "personId": 203999,
                    "firstName": "Nikola",
                    "familyName": "Jokić",
                    "jerseyNum": "15",
                    "position": "C",
                    "statistics": { "minutes": "36:40" }
                }
            ]
        },
        "actions": [
            {
                "actionNumber": 2,
                "period": 1,
                "clock": "PT12M00.00S",
                "actionType": "Jump Ball",
                "description": "Jump Ball Jokic vs. Holmgren"
            }
        ]
    })
}

#[test]
fn decodes_camel_case_feed() {
    let game = decode_game(&valid_game()).expect("valid game decodes");
    assert_eq!(game.game_id.as_str(), "0022300001");
    assert_eq!(game.home.team_id.as_i64(), 1610612760);
    assert_eq!(game.away.players[0].family_name, "Jokić");
    assert_eq!(game.away.players[0].minutes.as_deref(), Some("36:40"));
    assert_eq!(game.actions.len(), 1);
    assert_eq!(game.actions[0].action_type, "Jump Ball");
}

#[test]
fn decodes_snake_case_export() {
    let value = json!({
        "game_id": "G1",
        "home_team": {
            "team_id": 1,
            "players": [{ "person_id": 10, "first_name": "A", "family_name": "B" }]
        },
        "away_team": {
            "team_id": 2,
            "players": [{ "person_id": 20, "first_name": "C", "family_name": "D" }]
        },
        "actions": []
    });
    let game = decode_game(&value).expect("snake_case decodes");
    assert_eq!(game.home.players[0].person_id.as_i64(), 10);
    assert!(game.actions.is_empty());
}

#[test]
fn missing_team_id_is_structural() {
    let mut value = valid_game();
    value["homeTeam"]
        .as_object_mut()
        .expect("object")
        .remove("teamId");
    let error = decode_game(&value).expect_err("missing team id fails");
    assert!(matches!(error, IngestError::Structural(_)), "{error}");
}

#[test]
fn equal_team_ids_are_structural() {
    let mut value = valid_game();
    value["awayTeam"]["teamId"] = json!(1610612760);
    let error = decode_game(&value).expect_err("equal team ids fail");
    assert!(matches!(error, IngestError::Structural(_)), "{error}");
}

#[test]
fn empty_player_array_is_structural() {
    let mut value = valid_game();
    value["awayTeam"]["players"] = json!([]);
    let error = decode_game(&value).expect_err("empty players fail");
    assert!(matches!(error, IngestError::Structural(_)), "{error}");
}

#[test]
fn missing_action_log_is_structural() {
    let mut value = valid_game();
    value.as_object_mut().expect("object").remove("actions");
    let error = decode_game(&value).expect_err("missing actions fail");
    assert!(matches!(error, IngestError::Structural(_)), "{error}");
}

#[test]
fn malformed_action_rows_are_skipped() {
    let mut value = valid_game();
    value["actions"]
        .as_array_mut()
        .expect("array")
        .push(json!({ "actionNumber": 3, "period": 1 }));
    let game = decode_game(&value).expect("game still decodes");
    assert_eq!(game.actions.len(), 1);
}

#[test]
fn blank_position_becomes_none() {
    let mut value = valid_game();
    value["homeTeam"]["players"][0]["position"] = json!("");
    let game = decode_game(&value).expect("game decodes");
    assert_eq!(game.home.players[0].position, None);
}
