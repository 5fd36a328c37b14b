//! Per-user betting session.
//!
//! A `Session` owns the catalog, the slip and the stake input. Every user
//! action is a method call on it; nothing is shared between sessions.

use tracing::{debug, info};

use crate::application::calculator::{PayoutBasis, SlipTotals};
use crate::application::submission::{self, BetConfirmation};
use crate::domain::{MatchCatalog, MatchId, Outcome, Selection, Slip, StakeInput};
use crate::error::{SlipError, SubmitError};
use crate::port::outbound::notice::Notice;
use crate::port::outbound::odds::{CatalogSource, LoadReport, OddsSource};

/// Catalog, slip and stake for one user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: MatchCatalog,
    slip: Slip,
    stake: StakeInput,
    basis: PayoutBasis,
    source: Option<CatalogSource>,
    notice: Option<Notice>,
}

impl Session {
    #[must_use]
    pub fn new(basis: PayoutBasis) -> Self {
        Self {
            basis,
            ..Self::default()
        }
    }

    /// Load the catalog from `source`, replacing the current one.
    ///
    /// Returns the load notice, if any. The slip is left as it is.
    pub async fn refresh<S>(&mut self, source: &S) -> Option<&Notice>
    where
        S: OddsSource + ?Sized,
    {
        debug!(source = source.name(), "Refreshing catalog");
        let report = source.load().await;
        self.load_catalog(report);
        self.notice.as_ref()
    }

    /// Install a load result.
    pub fn load_catalog(&mut self, report: LoadReport) {
        self.catalog.replace(report.matches);
        self.source = Some(report.source);
        self.notice = report.notice;
    }

    /// Pick an outcome for a match in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `SlipError::MatchNotFound` for ids the catalog does not expose.
    pub fn select(&mut self, match_id: &MatchId, outcome: Outcome) -> Result<&Selection, SlipError> {
        let selection = self.slip.select(&self.catalog, match_id, outcome)?;
        debug!(match_id = %match_id, outcome = %outcome, price = %selection.price(), "Selection set");
        Ok(selection)
    }

    /// Remove the pick for a match.
    pub fn deselect(&mut self, match_id: &MatchId) -> Option<Selection> {
        self.slip.deselect(match_id)
    }

    pub fn clear_slip(&mut self) {
        self.slip.clear();
    }

    /// Replace the stake text.
    pub fn set_stake(&mut self, raw: impl Into<String>) {
        self.stake.set(raw);
    }

    /// Current combined odds, stake and potential winnings.
    #[must_use]
    pub fn totals(&self) -> SlipTotals {
        SlipTotals::compute(self.slip.selections(), &self.stake, self.basis)
    }

    /// Submit the slip.
    ///
    /// On success the slip and the stake input are reset. A rejection leaves
    /// everything unchanged, so the user can fix the input and retry.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::EmptySlip`] or [`SubmitError::InvalidStake`].
    pub fn place_bet(&mut self) -> Result<BetConfirmation, SubmitError> {
        let confirmation = submission::validate(&self.slip, &self.stake, self.basis)?;

        info!(
            selections = confirmation.selections.len(),
            total_odds = %confirmation.total_odds,
            stake = %confirmation.stake,
            potential_winnings = %confirmation.potential_winnings,
            "Bet placed"
        );

        self.slip.clear();
        self.stake.clear();
        Ok(confirmation)
    }

    #[must_use]
    pub const fn catalog(&self) -> &MatchCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn slip(&self) -> &Slip {
        &self.slip
    }

    #[must_use]
    pub const fn stake(&self) -> &StakeInput {
        &self.stake
    }

    #[must_use]
    pub const fn payout_basis(&self) -> PayoutBasis {
        self.basis
    }

    /// Origin of the current catalog; `None` before the first load.
    #[must_use]
    pub const fn catalog_source(&self) -> Option<CatalogSource> {
        self.source
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
