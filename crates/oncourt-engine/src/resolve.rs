//! Free-text player name resolution.
//!
//! Substitution descriptions carry player names only as free text, sometimes
//! truncated ("Jay. Williams") and sometimes with diacritics dropped. Names
//! are resolved against the team's roster through an ordered chain of
//! matchers, exact identity checks before fuzzy ones, so teammates with
//! similar surnames are never cross-matched by an early fuzzy hit. The first
//! matcher to produce a hit wins.

use tracing::{debug, trace};

use oncourt_model::{PersonId, Player, TeamId};

use crate::roster::Roster;

/// Expansions for first-name abbreviations the feed truncates ambiguously,
/// keyed and valued in folded form. Candidates are tried in order, so the
/// more common expansion comes first.
const ABBREVIATED_NAMES: &[(&str, &[&str])] = &[
    ("jay. williams", &["jaylin williams", "jalen williams"]),
    ("jal. williams", &["jalen williams", "jaylin williams"]),
    ("t. mann", &["terance mann", "tre mann"]),
    ("j. green", &["jalen green", "jeff green", "josh green"]),
    ("j. jackson", &["jaren jackson jr.", "justin jackson"]),
];

type Matcher = fn(&str, &[&Player]) -> Option<PersonId>;

/// The resolution cascade, in priority order.
const MATCHERS: &[(&str, Matcher)] = &[
    ("abbreviation-table", match_abbreviation),
    ("exact-name", match_exact),
    ("family-name", match_family),
    ("fuzzy-containment", match_fuzzy),
];

/// Folds a name for comparison: trims, lowercases, and strips the Latin
/// diacritics that appear on NBA rosters.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase().chars().map(fold_char).collect()
}

fn fold_char(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'đ' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' => 'e',
        'ģ' | 'ğ' => 'g',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'ķ' => 'k',
        'ļ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' => 'o',
        'š' | 'ş' => 's',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'ý' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

/// Resolves a free-text name to a player on `team_id`.
///
/// Returns `None` when no matcher hits. Misses are logged at `debug` when
/// `suppress_warnings` is set (the substitution parser reports them through
/// the track report instead) and at `warn` otherwise.
pub fn resolve(
    roster: &Roster,
    name: &str,
    team_id: TeamId,
    suppress_warnings: bool,
) -> Option<PersonId> {
    let folded = fold_name(name);
    if folded.is_empty() {
        return None;
    }
    let candidates: Vec<&Player> = roster.team_players(team_id).collect();
    for (label, matcher) in MATCHERS {
        if let Some(id) = matcher(&folded, &candidates) {
            trace!(matcher = label, name, %id, "resolved player name");
            return Some(id);
        }
    }
    if suppress_warnings {
        debug!(name, team = %team_id, "unresolved player name");
    } else {
        tracing::warn!(name, team = %team_id, "unresolved player name");
    }
    None
}

fn match_abbreviation(query: &str, candidates: &[&Player]) -> Option<PersonId> {
    let (_, expansions) = ABBREVIATED_NAMES.iter().find(|(key, _)| *key == query)?;
    for expansion in *expansions {
        let hit = candidates
            .iter()
            .find(|player| fold_name(&player.full_name()) == *expansion);
        if let Some(player) = hit {
            return Some(player.id);
        }
    }
    None
}

fn match_exact(query: &str, candidates: &[&Player]) -> Option<PersonId> {
    for player in candidates {
        if query == fold_name(&player.full_name()) {
            return Some(player.id);
        }
        if let Some(initial) = player.first_name.trim().chars().next() {
            let initialed = format!("{initial}. {}", player.family_name);
            if query == fold_name(&initialed) {
                return Some(player.id);
            }
        }
        if query == fold_name(&player.display_name) {
            return Some(player.id);
        }
    }
    None
}

fn match_family(query: &str, candidates: &[&Player]) -> Option<PersonId> {
    candidates
        .iter()
        .find(|player| query == fold_name(&player.family_name))
        .map(|player| player.id)
}

/// Last resort: containment of the search string in the full name, or a
/// suffix match against the full name's last token.
fn match_fuzzy(query: &str, candidates: &[&Player]) -> Option<PersonId> {
    for player in candidates {
        let full = fold_name(&player.full_name());
        if full.contains(query) {
            return Some(player.id);
        }
        let last_token = full.split_whitespace().last().unwrap_or_default();
        if !query.is_empty() && last_token.ends_with(query) {
            return Some(player.id);
        }
    }
    None
}
