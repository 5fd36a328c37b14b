//! The currently displayed set of matches.

use super::fixture::MatchOdds;
use super::id::MatchId;
use crate::error::SlipError;

/// Matches from the latest load, in provider order.
///
/// The catalog is only ever replaced wholesale; there is no incremental merge.
#[derive(Debug, Clone, Default)]
pub struct MatchCatalog {
    matches: Vec<MatchOdds>,
}

impl MatchCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every match with the given set.
    pub fn replace(&mut self, matches: Vec<MatchOdds>) {
        self.matches = matches;
    }

    /// Look up a match by id.
    ///
    /// # Errors
    ///
    /// Returns `SlipError::MatchNotFound` when the id is not in the catalog.
    pub fn find(&self, id: &MatchId) -> Result<&MatchOdds, SlipError> {
        self.matches
            .iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| SlipError::MatchNotFound {
                match_id: id.clone(),
            })
    }

    #[must_use]
    pub fn matches(&self) -> &[MatchOdds] {
        &self.matches
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl From<Vec<MatchOdds>> for MatchCatalog {
    fn from(matches: Vec<MatchOdds>) -> Self {
        Self { matches }
    }
}
