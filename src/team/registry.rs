//! Static franchise and abbreviation-change tables.
//!
//! The registry is built once at startup and passed by reference into the
//! resolver and normalizer; it is never mutated afterwards. Lookups return
//! `Option` or a [`ChangeLookup`] value, never an error.

use crate::cli::types::Season;
use std::collections::{BTreeMap, BTreeSet};

/// Sentinel team value for players without a current roster spot.
pub const FREE_AGENT: &str = "FA";

/// One active franchise: full name and the abbreviation in current use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FranchiseRecord {
    pub full_name: &'static str,
    pub abbreviation: &'static str,
}

/// A token rewrite.
///
/// Year-scoped entries capture true relocations or renamings and carry the
/// first season the new token applies to. Entries without an effective
/// season correct codes that some sources print differently, regardless of
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbbreviationChange {
    pub old_token: &'static str,
    pub new_token: &'static str,
    pub effective: Option<u16>,
}

/// Result of looking a token up in the change tables for a given season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeLookup {
    /// A change rewrites the token for this season.
    Mapped(&'static str),
    /// A relocation exists but takes effect after this season; the old
    /// token is the canonical abbreviation for this season.
    Historical,
    /// No entry for this token.
    NotFound,
}

const FRANCHISES: &[FranchiseRecord] = &[
    FranchiseRecord { full_name: "Arizona Cardinals", abbreviation: "ARI" },
    FranchiseRecord { full_name: "Atlanta Falcons", abbreviation: "ATL" },
    FranchiseRecord { full_name: "Baltimore Ravens", abbreviation: "BAL" },
    FranchiseRecord { full_name: "Buffalo Bills", abbreviation: "BUF" },
    FranchiseRecord { full_name: "Carolina Panthers", abbreviation: "CAR" },
    FranchiseRecord { full_name: "Chicago Bears", abbreviation: "CHI" },
    FranchiseRecord { full_name: "Cincinnati Bengals", abbreviation: "CIN" },
    FranchiseRecord { full_name: "Cleveland Browns", abbreviation: "CLE" },
    FranchiseRecord { full_name: "Dallas Cowboys", abbreviation: "DAL" },
    FranchiseRecord { full_name: "Denver Broncos", abbreviation: "DEN" },
    FranchiseRecord { full_name: "Detroit Lions", abbreviation: "DET" },
    FranchiseRecord { full_name: "Green Bay Packers", abbreviation: "GB" },
    FranchiseRecord { full_name: "Houston Texans", abbreviation: "HOU" },
    FranchiseRecord { full_name: "Indianapolis Colts", abbreviation: "IND" },
    FranchiseRecord { full_name: "Jacksonville Jaguars", abbreviation: "JAC" },
    FranchiseRecord { full_name: "Kansas City Chiefs", abbreviation: "KC" },
    FranchiseRecord { full_name: "Las Vegas Raiders", abbreviation: "LV" },
    FranchiseRecord { full_name: "Los Angeles Chargers", abbreviation: "LAC" },
    FranchiseRecord { full_name: "Los Angeles Rams", abbreviation: "LAR" },
    FranchiseRecord { full_name: "Miami Dolphins", abbreviation: "MIA" },
    FranchiseRecord { full_name: "Minnesota Vikings", abbreviation: "MIN" },
    FranchiseRecord { full_name: "New England Patriots", abbreviation: "NE" },
    FranchiseRecord { full_name: "New Orleans Saints", abbreviation: "NO" },
    FranchiseRecord { full_name: "New York Giants", abbreviation: "NYG" },
    FranchiseRecord { full_name: "New York Jets", abbreviation: "NYJ" },
    FranchiseRecord { full_name: "Philadelphia Eagles", abbreviation: "PHI" },
    FranchiseRecord { full_name: "Pittsburgh Steelers", abbreviation: "PIT" },
    FranchiseRecord { full_name: "San Francisco 49ers", abbreviation: "SF" },
    FranchiseRecord { full_name: "Seattle Seahawks", abbreviation: "SEA" },
    FranchiseRecord { full_name: "Tampa Bay Buccaneers", abbreviation: "TB" },
    FranchiseRecord { full_name: "Tennessee Titans", abbreviation: "TEN" },
    FranchiseRecord { full_name: "Washington Commanders", abbreviation: "WAS" },
];

const CHANGES: &[AbbreviationChange] = &[
    // relocations
    AbbreviationChange { old_token: "OAK", new_token: "LV", effective: Some(2020) },
    AbbreviationChange { old_token: "SD", new_token: "LAC", effective: Some(2016) },
    AbbreviationChange { old_token: "STL", new_token: "LAR", effective: Some(2016) },
    // codes other sources print for current teams
    AbbreviationChange { old_token: "JAX", new_token: "JAC", effective: None },
    AbbreviationChange { old_token: "GNB", new_token: "GB", effective: None },
    AbbreviationChange { old_token: "KAN", new_token: "KC", effective: None },
    AbbreviationChange { old_token: "NWE", new_token: "NE", effective: None },
    AbbreviationChange { old_token: "NOR", new_token: "NO", effective: None },
    AbbreviationChange { old_token: "SFO", new_token: "SF", effective: None },
    AbbreviationChange { old_token: "TAM", new_token: "TB", effective: None },
    AbbreviationChange { old_token: "LVR", new_token: "LV", effective: None },
    AbbreviationChange { old_token: "WSH", new_token: "WAS", effective: None },
];

/// Read-only franchise and abbreviation tables.
#[derive(Debug)]
pub struct TeamRegistry {
    by_name: BTreeMap<&'static str, &'static str>,
    current: BTreeSet<&'static str>,
    year_scoped: BTreeMap<&'static str, (u16, &'static str)>,
    general: BTreeMap<&'static str, &'static str>,
}

impl TeamRegistry {
    /// Build the registry from the built-in NFL tables.
    pub fn nfl() -> Self {
        let mut by_name = BTreeMap::new();
        let mut current = BTreeSet::new();
        for franchise in FRANCHISES {
            by_name.insert(franchise.full_name, franchise.abbreviation);
            current.insert(franchise.abbreviation);
        }

        let mut year_scoped = BTreeMap::new();
        let mut general = BTreeMap::new();
        for change in CHANGES {
            match change.effective {
                Some(year) => {
                    year_scoped.insert(change.old_token, (year, change.new_token));
                }
                None => {
                    general.insert(change.old_token, change.new_token);
                }
            }
        }

        Self {
            by_name,
            current,
            year_scoped,
            general,
        }
    }

    /// The canonical abbreviations in use this season.
    pub fn current_abbreviations(&self) -> &BTreeSet<&'static str> {
        &self.current
    }

    pub fn is_current(&self, token: &str) -> bool {
        self.current.contains(token)
    }

    /// Abbreviation for a full franchise name, if known.
    pub fn abbreviation_for_name(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).copied()
    }

    /// Look a token up in the change tables for a season.
    ///
    /// Year-scoped entries take precedence over general ones, so for a
    /// given `(token, season)` at most one change applies.
    pub fn change_for(&self, token: &str, season: Season) -> ChangeLookup {
        if let Some(&(effective, new_token)) = self.year_scoped.get(token) {
            return if season.as_u16() >= effective {
                ChangeLookup::Mapped(new_token)
            } else {
                ChangeLookup::Historical
            };
        }
        match self.general.get(token) {
            Some(&new_token) => ChangeLookup::Mapped(new_token),
            None => ChangeLookup::NotFound,
        }
    }

    /// Every token the registry knows: current abbreviations plus every
    /// old token from the change tables. Used to disambiguate team
    /// suffixes glued onto player names.
    pub fn known_tokens(&self) -> BTreeSet<&'static str> {
        let mut tokens = self.current.clone();
        tokens.extend(self.year_scoped.keys().copied());
        tokens.extend(self.general.keys().copied());
        tokens
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::nfl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_32_franchises() {
        let registry = TeamRegistry::nfl();
        assert_eq!(registry.current_abbreviations().len(), 32);
        assert_eq!(
            registry.abbreviation_for_name("Kansas City Chiefs"),
            Some("KC")
        );
        assert_eq!(registry.abbreviation_for_name("Kansas City"), None);
    }

    #[test]
    fn test_change_for_year_scoped_boundary() {
        let registry = TeamRegistry::nfl();
        assert_eq!(
            registry.change_for("OAK", Season::new(2020)),
            ChangeLookup::Mapped("LV")
        );
        assert_eq!(
            registry.change_for("OAK", Season::new(2019)),
            ChangeLookup::Historical
        );
        assert_eq!(
            registry.change_for("SD", Season::new(2016)),
            ChangeLookup::Mapped("LAC")
        );
        assert_eq!(
            registry.change_for("STL", Season::new(2015)),
            ChangeLookup::Historical
        );
    }

    #[test]
    fn test_change_for_general_ignores_season() {
        let registry = TeamRegistry::nfl();
        for season in [2009, 2016, 2021] {
            assert_eq!(
                registry.change_for("JAX", Season::new(season)),
                ChangeLookup::Mapped("JAC")
            );
        }
    }

    #[test]
    fn test_change_for_unknown_token() {
        let registry = TeamRegistry::nfl();
        assert_eq!(
            registry.change_for("XYZ", Season::new(2021)),
            ChangeLookup::NotFound
        );
    }

    #[test]
    fn test_every_change_lands_on_a_current_abbreviation() {
        let registry = TeamRegistry::nfl();
        for change in CHANGES {
            assert!(
                registry.is_current(change.new_token),
                "{} maps to stale token {}",
                change.old_token,
                change.new_token
            );
        }
    }

    #[test]
    fn test_known_tokens_cover_current_and_old() {
        let registry = TeamRegistry::nfl();
        let tokens = registry.known_tokens();
        assert!(tokens.contains("KC"));
        assert!(tokens.contains("OAK"));
        assert!(tokens.contains("JAX"));
        assert!(!tokens.contains("XYZ"));
    }
}
