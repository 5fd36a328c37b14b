//! The betting slip: at most one selection per match, in insertion order.

use super::catalog::MatchCatalog;
use super::id::MatchId;
use super::outcome::Outcome;
use super::selection::Selection;
use crate::error::SlipError;

/// Ordered selections keyed by match.
///
/// Replacing the pick for a match that is already on the slip keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct Slip {
    selections: Vec<Selection>,
}

impl Slip {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick `outcome` for `match_id`, replacing any earlier pick for that match.
    ///
    /// Picking the same outcome twice is an idempotent replacement, not a toggle.
    ///
    /// # Errors
    ///
    /// Returns `SlipError::MatchNotFound` if the catalog does not hold the match.
    pub fn select(
        &mut self,
        catalog: &MatchCatalog,
        match_id: &MatchId,
        outcome: Outcome,
    ) -> Result<&Selection, SlipError> {
        let odds = catalog.find(match_id)?;
        let selection = Selection::from_match(odds, outcome);

        let index = match self.position(match_id) {
            Some(index) => {
                self.selections[index] = selection;
                index
            }
            None => {
                self.selections.push(selection);
                self.selections.len() - 1
            }
        };

        Ok(&self.selections[index])
    }

    /// Remove the pick for a match, if any.
    pub fn deselect(&mut self, match_id: &MatchId) -> Option<Selection> {
        self.position(match_id)
            .map(|index| self.selections.remove(index))
    }

    /// Remove every selection.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    #[must_use]
    pub fn get(&self, match_id: &MatchId) -> Option<&Selection> {
        self.selections.iter().find(|s| s.match_id() == match_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    fn position(&self, match_id: &MatchId) -> Option<usize> {
        self.selections
            .iter()
            .position(|s| s.match_id() == match_id)
    }
}
