//! Splitting raw scraped player strings into a clean name and team token.
//!
//! Each source encodes the team differently: stats tables append it in
//! parentheses (`"Patrick Mahomes II(KC)"`), projection tables glue the
//! code onto the last word (`"Patrick Mahomes IIKC"`), and snapcount
//! tables carry it in its own column. The glued form cannot be split by
//! scanning for uppercase letters alone, so the parser matches the
//! trailing run against the registry's known tokens and refuses to guess
//! when that match is not unique.

use crate::error::{FfdpError, Result};
use crate::team::registry::{TeamRegistry, FREE_AGENT};
use serde::{Deserialize, Serialize};

/// How a source encodes name and team in the player cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameFormat {
    /// `"Patrick Mahomes II(KC)"`: team between the last parentheses.
    ParenthesizedTeam,
    /// `"Patrick Mahomes IIKC"`: team code glued to the last word.
    ConcatenatedTeamSuffix,
    /// Team arrives in its own column; only the name needs cleaning.
    SeparateColumn,
}

/// A split player cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlayer {
    pub name: String,
    pub team_token: Option<String>,
}

/// Strip scrape artifacts from a name: trailing roster-footnote markers,
/// stray surrounding apostrophes or quotes, and runs of whitespace.
/// Interior punctuation and generational suffixes are preserved.
pub fn clean_name(raw: &str) -> String {
    let stripped = raw.trim().trim_end_matches(['*', '+']);
    let stripped = stripped.trim().trim_matches(['\'', '"']);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `raw` according to `format`.
///
/// The registry supplies the reference token set for the concatenated
/// format. Failure to separate name from team is an
/// [`FfdpError::AmbiguousPlayer`], never a silent guess.
pub fn parse_player(raw: &str, format: NameFormat, registry: &TeamRegistry) -> Result<ParsedPlayer> {
    match format {
        NameFormat::ParenthesizedTeam => parse_parenthesized(raw),
        NameFormat::ConcatenatedTeamSuffix => parse_concatenated(raw, registry),
        NameFormat::SeparateColumn => Ok(ParsedPlayer {
            name: clean_name(raw),
            team_token: None,
        }),
    }
}

fn parse_parenthesized(raw: &str) -> Result<ParsedPlayer> {
    let Some(first_open) = raw.find('(') else {
        // Retired or team-less rows sometimes drop the parentheses.
        return Ok(ParsedPlayer {
            name: clean_name(raw),
            team_token: None,
        });
    };

    let last_open = raw.rfind('(').unwrap_or(first_open);
    let tail = &raw[last_open + 1..];
    let Some(close) = tail.find(')') else {
        return Err(FfdpError::AmbiguousPlayer {
            raw: raw.to_string(),
        });
    };

    Ok(ParsedPlayer {
        name: clean_name(&raw[..first_open]),
        team_token: Some(tail[..close].trim().to_string()),
    })
}

fn parse_concatenated(raw: &str, registry: &TeamRegistry) -> Result<ParsedPlayer> {
    let cleaned = clean_name(raw);

    // Team-unit rows print the bare franchise name.
    if let Some(abbreviation) = registry.abbreviation_for_name(&cleaned) {
        return Ok(ParsedPlayer {
            name: cleaned,
            team_token: Some(abbreviation.to_string()),
        });
    }

    let Some(last_word) = cleaned.split_whitespace().last() else {
        return Err(FfdpError::AmbiguousPlayer {
            raw: raw.to_string(),
        });
    };

    // Trailing run of uppercase letters on the last word.
    let mut run_start = last_word.len();
    for (i, c) in last_word.char_indices().rev() {
        if c.is_ascii_uppercase() {
            run_start = i;
        } else {
            break;
        }
    }
    let run = &last_word[run_start..];

    // The run may cover more than the team code ("IIKC"), so every
    // suffix of it is checked against the reference set; exactly one
    // hit separates name from team.
    let tokens = registry.known_tokens();
    let mut matches: Vec<&str> = Vec::new();
    for (i, _) in run.char_indices() {
        let candidate = &run[i..];
        if candidate == FREE_AGENT || tokens.contains(candidate) {
            matches.push(candidate);
        }
    }

    if matches.len() != 1 {
        return Err(FfdpError::AmbiguousPlayer {
            raw: raw.to_string(),
        });
    }
    let token = matches[0];

    let name = cleaned[..cleaned.len() - token.len()].trim_end();
    if name.is_empty() {
        return Err(FfdpError::AmbiguousPlayer {
            raw: raw.to_string(),
        });
    }

    Ok(ParsedPlayer {
        name: name.to_string(),
        team_token: Some(token.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_artifacts() {
        assert_eq!(clean_name("Josh Allen*"), "Josh Allen");
        assert_eq!(clean_name("Josh Allen*+ "), "Josh Allen");
        assert_eq!(clean_name("'Tutu Atwell'"), "Tutu Atwell");
        assert_eq!(clean_name("  Derrick   Henry "), "Derrick Henry");
    }

    #[test]
    fn test_clean_name_keeps_interior_punctuation_and_suffixes() {
        assert_eq!(clean_name("D'Andre Swift"), "D'Andre Swift");
        assert_eq!(clean_name("Odell Beckham Jr."), "Odell Beckham Jr.");
        assert_eq!(clean_name("Patrick Mahomes II"), "Patrick Mahomes II");
    }

    #[test]
    fn test_parenthesized_split() {
        let registry = TeamRegistry::nfl();
        let parsed = parse_player(
            "Patrick Mahomes II(KC)",
            NameFormat::ParenthesizedTeam,
            &registry,
        )
        .unwrap();
        assert_eq!(parsed.name, "Patrick Mahomes II");
        assert_eq!(parsed.team_token.as_deref(), Some("KC"));
    }

    #[test]
    fn test_parenthesized_free_agent_and_missing_parens() {
        let registry = TeamRegistry::nfl();
        let parsed =
            parse_player("Rob Gronkowski(FA)", NameFormat::ParenthesizedTeam, &registry).unwrap();
        assert_eq!(parsed.team_token.as_deref(), Some("FA"));

        let parsed =
            parse_player("Rob Gronkowski", NameFormat::ParenthesizedTeam, &registry).unwrap();
        assert_eq!(parsed.name, "Rob Gronkowski");
        assert_eq!(parsed.team_token, None);
    }

    #[test]
    fn test_parenthesized_unclosed_is_ambiguous() {
        let registry = TeamRegistry::nfl();
        let result = parse_player("Josh Allen(BUF", NameFormat::ParenthesizedTeam, &registry);
        assert!(matches!(result, Err(FfdpError::AmbiguousPlayer { .. })));
    }

    #[test]
    fn test_concatenated_suffix_split() {
        let registry = TeamRegistry::nfl();
        let parsed = parse_player(
            "Patrick Mahomes IIKC",
            NameFormat::ConcatenatedTeamSuffix,
            &registry,
        )
        .unwrap();
        assert_eq!(parsed.name, "Patrick Mahomes II");
        assert_eq!(parsed.team_token.as_deref(), Some("KC"));

        let parsed = parse_player(
            "Christian McCaffreySF",
            NameFormat::ConcatenatedTeamSuffix,
            &registry,
        )
        .unwrap();
        assert_eq!(parsed.name, "Christian McCaffrey");
        assert_eq!(parsed.team_token.as_deref(), Some("SF"));
    }

    #[test]
    fn test_concatenated_franchise_name_row() {
        let registry = TeamRegistry::nfl();
        let parsed = parse_player(
            "Arizona Cardinals",
            NameFormat::ConcatenatedTeamSuffix,
            &registry,
        )
        .unwrap();
        assert_eq!(parsed.name, "Arizona Cardinals");
        assert_eq!(parsed.team_token.as_deref(), Some("ARI"));
    }

    #[test]
    fn test_concatenated_free_agent_suffix() {
        let registry = TeamRegistry::nfl();
        let parsed = parse_player(
            "Cam NewtonFA",
            NameFormat::ConcatenatedTeamSuffix,
            &registry,
        )
        .unwrap();
        assert_eq!(parsed.name, "Cam Newton");
        assert_eq!(parsed.team_token.as_deref(), Some("FA"));
    }

    #[test]
    fn test_concatenated_without_valid_suffix_is_ambiguous() {
        let registry = TeamRegistry::nfl();
        let result = parse_player(
            "Odell Beckham Jr.",
            NameFormat::ConcatenatedTeamSuffix,
            &registry,
        );
        assert!(matches!(result, Err(FfdpError::AmbiguousPlayer { .. })));
    }

    #[test]
    fn test_separate_column_only_cleans() {
        let registry = TeamRegistry::nfl();
        let parsed = parse_player("Aaron Rodgers*", NameFormat::SeparateColumn, &registry).unwrap();
        assert_eq!(parsed.name, "Aaron Rodgers");
        assert_eq!(parsed.team_token, None);
    }
}
