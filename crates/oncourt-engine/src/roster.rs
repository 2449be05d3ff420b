//! Player directory construction and nominal-starter flagging.

use std::collections::BTreeMap;

use tracing::debug;

use oncourt_model::{
    GameRecord, IssueKind, PersonId, Player, PlayerRecord, TeamId, TeamRecord, TrackReport,
};

use crate::clock::parse_minutes;
use crate::error::{Result, TrackError};

/// Immutable player directory for one game, keyed by person id across both
/// teams.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Roster {
    pub players: BTreeMap<PersonId, Player>,
    pub home_team: TeamId,
    pub away_team: TeamId,
}

impl Roster {
    /// Builds the directory from both team rosters.
    ///
    /// Per team, the top five players by recorded minutes among those with a
    /// known position are flagged as nominal starters. Unparseable minutes
    /// count as zero and are reported, not fatal; a person id appearing on
    /// both teams is.
    pub fn build(game: &GameRecord, report: &mut TrackReport) -> Result<Self> {
        let mut players = BTreeMap::new();
        for team in [&game.home, &game.away] {
            for player in build_team(team, report) {
                let id = player.id;
                if players.insert(id, player).is_some() {
                    return Err(TrackError::Roster(format!(
                        "person id {id} appears on both teams"
                    )));
                }
            }
        }
        debug!(players = players.len(), "built player directory");
        Ok(Self {
            players,
            home_team: game.home.team_id,
            away_team: game.away.team_id,
        })
    }

    pub fn get(&self, id: PersonId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Display name for an id, falling back to the id itself for players
    /// missing from the directory.
    pub fn display_name(&self, id: PersonId) -> String {
        self.get(id)
            .map_or_else(|| id.to_string(), |player| player.display_name.clone())
    }

    /// All players of one team, in id order.
    pub fn team_players(&self, team: TeamId) -> impl Iterator<Item = &Player> {
        self.players
            .values()
            .filter(move |player| player.team_id == team)
    }

    /// The nominal starters of one team, in id order.
    pub fn nominal_starters(&self, team: TeamId) -> Vec<PersonId> {
        self.team_players(team)
            .filter(|player| player.is_starter)
            .map(|player| player.id)
            .collect()
    }
}

fn build_team(team: &TeamRecord, report: &mut TrackReport) -> Vec<Player> {
    let mut players: Vec<(Player, bool)> = team
        .players
        .iter()
        .map(|record| convert_player(record, team.team_id, report))
        .collect();

    // Rank starter candidates: known position and parseable minutes, by
    // minutes descending with id as the deterministic tie-break.
    let mut candidates: Vec<usize> = (0..players.len())
        .filter(|&index| {
            let (player, had_minutes) = &players[index];
            let has_position = player
                .position
                .as_deref()
                .is_some_and(|position| !position.trim().is_empty());
            has_position && *had_minutes
        })
        .collect();
    candidates.sort_by(|&a, &b| {
        players[b]
            .0
            .seconds_played
            .cmp(&players[a].0.seconds_played)
            .then(players[a].0.id.cmp(&players[b].0.id))
    });
    for &index in candidates.iter().take(5) {
        players[index].0.is_starter = true;
    }

    players.into_iter().map(|(player, _)| player).collect()
}

fn convert_player(
    record: &PlayerRecord,
    team_id: TeamId,
    report: &mut TrackReport,
) -> (Player, bool) {
    let parsed = match record.minutes.as_deref() {
        Some(raw) => {
            let parsed = parse_minutes(raw);
            if parsed.is_none() {
                report.push_warning(
                    IssueKind::BadMinutes,
                    None,
                    None,
                    format!(
                        "minutes {raw:?} for {} {} treated as 0:00",
                        record.first_name, record.family_name
                    ),
                );
            }
            parsed
        }
        None => None,
    };
    let display_name = record
        .display_name
        .clone()
        .unwrap_or_else(|| format!("{} {}", record.first_name, record.family_name));
    let player = Player {
        id: record.person_id,
        first_name: record.first_name.clone(),
        family_name: record.family_name.clone(),
        display_name,
        jersey: record.jersey.clone(),
        position: record.position.clone(),
        team_id,
        is_starter: false,
        seconds_played: parsed.unwrap_or(0),
    };
    (player, parsed.is_some())
}
