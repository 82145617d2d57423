//! Year-relative canonicalization of raw team tokens.
//!
//! Scraped tables spell teams three ways: a full franchise name, the
//! current abbreviation, or a legacy/source-specific code. `resolve`
//! maps any of them to the abbreviation that is canonical for the
//! requested season. Unresolved tokens come back unchanged together with
//! a diagnostic; the resolver never substitutes a guess and never prints.

use crate::cli::types::Season;
use crate::team::registry::{ChangeLookup, TeamRegistry, FREE_AGENT};
use serde::Serialize;

/// How a token was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResolutionSource {
    /// Free-agent marker, mapped to the `FA` sentinel without lookup.
    FreeAgent,
    /// Token already is a current abbreviation.
    Current,
    /// Token was a full franchise name.
    FullName,
    /// Token was rewritten by a change-table entry.
    Change,
    /// Old abbreviation that is canonical for the requested season.
    Historical,
    /// Nothing matched; the raw token is passed through.
    Unresolved,
}

/// Outcome of a single `resolve` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamResolution {
    pub team: String,
    pub source: ResolutionSource,
}

impl TeamResolution {
    pub fn is_resolved(&self) -> bool {
        !matches!(self.source, ResolutionSource::Unresolved)
    }
}

/// Diagnostic for a token the resolver could not canonicalize.
///
/// Common for free agents spelled in unexpected ways and for typos in
/// the source; callers decide whether to keep the row or drop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedTeamToken {
    pub token: String,
    pub season: Season,
}

pub struct TeamResolver<'a> {
    registry: &'a TeamRegistry,
}

impl<'a> TeamResolver<'a> {
    pub fn new(registry: &'a TeamRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TeamRegistry {
        self.registry
    }

    /// Canonicalize `token` for `season`.
    ///
    /// The match order is load-bearing: a current abbreviation wins over
    /// the change tables so that a legacy token which coincides with a
    /// different team's current code after a relocation is not rewritten.
    pub fn resolve(&self, token: &str, season: Season) -> TeamResolution {
        let token = token.trim();

        if token.is_empty() || token == FREE_AGENT {
            return TeamResolution {
                team: FREE_AGENT.to_string(),
                source: ResolutionSource::FreeAgent,
            };
        }

        if self.registry.is_current(token) {
            return TeamResolution {
                team: token.to_string(),
                source: ResolutionSource::Current,
            };
        }

        if let Some(abbreviation) = self.registry.abbreviation_for_name(token) {
            return TeamResolution {
                team: abbreviation.to_string(),
                source: ResolutionSource::FullName,
            };
        }

        match self.registry.change_for(token, season) {
            ChangeLookup::Mapped(abbreviation) => TeamResolution {
                team: abbreviation.to_string(),
                source: ResolutionSource::Change,
            },
            ChangeLookup::Historical => TeamResolution {
                team: token.to_string(),
                source: ResolutionSource::Historical,
            },
            ChangeLookup::NotFound => TeamResolution {
                team: token.to_string(),
                source: ResolutionSource::Unresolved,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_fixture() -> TeamRegistry {
        TeamRegistry::nfl()
    }

    #[test]
    fn test_current_abbreviations_are_idempotent() {
        let registry = resolver_fixture();
        let resolver = TeamResolver::new(&registry);
        for abbreviation in registry.current_abbreviations() {
            for season in [2009, 2015, 2021] {
                let resolution = resolver.resolve(abbreviation, Season::new(season));
                assert_eq!(resolution.team, *abbreviation);
                assert_eq!(resolution.source, ResolutionSource::Current);
            }
        }
    }

    #[test]
    fn test_full_name_resolves_to_current_abbreviation() {
        let registry = resolver_fixture();
        let resolver = TeamResolver::new(&registry);
        let resolution = resolver.resolve("Las Vegas Raiders", Season::new(2021));
        assert_eq!(resolution.team, "LV");
        assert_eq!(resolution.source, ResolutionSource::FullName);
    }

    #[test]
    fn test_relocation_is_year_relative() {
        let registry = resolver_fixture();
        let resolver = TeamResolver::new(&registry);

        let before = resolver.resolve("OAK", Season::new(2018));
        assert_eq!(before.team, "OAK");
        assert_eq!(before.source, ResolutionSource::Historical);

        let after = resolver.resolve("OAK", Season::new(2021));
        assert_eq!(after.team, "LV");
        assert_eq!(after.source, ResolutionSource::Change);

        assert_ne!(
            resolver.resolve("OAK", Season::new(2019)).team,
            resolver.resolve("OAK", Season::new(2020)).team
        );
    }

    #[test]
    fn test_general_change_applies_any_season() {
        let registry = resolver_fixture();
        let resolver = TeamResolver::new(&registry);
        for season in [2010, 2016, 2021] {
            assert_eq!(resolver.resolve("JAX", Season::new(season)).team, "JAC");
        }
    }

    #[test]
    fn test_free_agent_marker_is_sentinel() {
        let registry = resolver_fixture();
        let resolver = TeamResolver::new(&registry);

        let fa = resolver.resolve("FA", Season::new(2021));
        assert_eq!(fa.team, FREE_AGENT);
        assert_eq!(fa.source, ResolutionSource::FreeAgent);

        let empty = resolver.resolve("  ", Season::new(2021));
        assert_eq!(empty.team, FREE_AGENT);
        assert_eq!(empty.source, ResolutionSource::FreeAgent);
    }

    #[test]
    fn test_unknown_token_passes_through_unchanged() {
        let registry = resolver_fixture();
        let resolver = TeamResolver::new(&registry);
        let resolution = resolver.resolve("XYZ", Season::new(2021));
        assert_eq!(resolution.team, "XYZ");
        assert_eq!(resolution.source, ResolutionSource::Unresolved);
        assert!(!resolution.is_resolved());
    }

    #[test]
    fn test_token_is_trimmed_before_lookup() {
        let registry = resolver_fixture();
        let resolver = TeamResolver::new(&registry);
        assert_eq!(resolver.resolve(" KC ", Season::new(2021)).team, "KC");
    }
}
