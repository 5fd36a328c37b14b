//! Text rendering of the catalog, slip and notices.

use tabled::{Table, Tabled};

use super::output;
use crate::application::session::Session;
use crate::domain::money;
use crate::domain::{MatchOdds, Outcome, Selection};
use crate::port::outbound::notice::{Notice, Severity};
use crate::port::outbound::odds::CatalogSource;

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Match")]
    fixture: String,
    #[tabled(rename = "1")]
    home: String,
    #[tabled(rename = "X")]
    draw: String,
    #[tabled(rename = "2")]
    away: String,
}

impl From<&MatchOdds> for MatchRow {
    fn from(m: &MatchOdds) -> Self {
        Self {
            id: m.id().to_string(),
            fixture: m.label(),
            home: money::display(m.price_for(Outcome::Home)),
            draw: money::display(m.price_for(Outcome::Draw)),
            away: money::display(m.price_for(Outcome::Away)),
        }
    }
}

#[derive(Tabled)]
struct SelectionRow {
    #[tabled(rename = "Match")]
    fixture: String,
    #[tabled(rename = "Bet")]
    outcome: Outcome,
    #[tabled(rename = "Odds")]
    price: String,
}

impl From<&Selection> for SelectionRow {
    fn from(s: &Selection) -> Self {
        Self {
            fixture: format!("{} vs {}", s.home_team(), s.away_team()),
            outcome: s.outcome(),
            price: money::display(s.price()),
        }
    }
}

pub fn notice(notice: &Notice) {
    match notice.severity {
        Severity::Info => output::note(&notice.message),
        Severity::Error => output::warning(&notice.message),
    }
}

/// Catalog table: id, teams, and the three prices.
#[must_use]
pub fn matches_table(matches: &[MatchOdds]) -> String {
    Table::new(matches.iter().map(MatchRow::from)).to_string()
}

/// Slip table: one row per selection in slip order.
#[must_use]
pub fn slip_table(selections: &[Selection]) -> String {
    Table::new(selections.iter().map(SelectionRow::from)).to_string()
}

/// "Home vs Away  Bet: X @ 3.50".
#[must_use]
pub fn selection_line(s: &Selection) -> String {
    format!(
        "{} vs {}  Bet: {} @ {}",
        s.home_team(),
        s.away_team(),
        s.outcome(),
        money::display(s.price())
    )
}

pub fn matches(session: &Session) {
    let title = match session.catalog_source() {
        Some(CatalogSource::Fallback) => "Matches (sample)",
        _ => "Matches",
    };
    output::section(title);

    if session.catalog().is_empty() {
        output::note("No upcoming matches.");
        return;
    }
    output::lines(&matches_table(session.catalog().matches()));
}

pub fn slip(session: &Session) {
    output::section("Betting slip");
    if session.slip().is_empty() {
        output::note("(empty)");
    } else {
        output::lines(&slip_table(session.slip().selections()));
    }

    let totals = session.totals();
    output::field("Total Odds", output::highlight(totals.display_total_odds()));
    if session.stake().is_empty() {
        output::field("Stake", output::muted(totals.display_stake()));
    } else {
        output::field("Stake", totals.display_stake());
    }
    output::field(
        "Potential Winnings",
        output::highlight(totals.display_winnings()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchCatalog;
    use crate::domain::{MatchId, Slip};
    use crate::testkit::domain::sample_matches;

    fn row_containing<'a>(table: &'a str, needle: &str) -> &'a str {
        table
            .lines()
            .find(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no row containing {needle:?} in\n{table}"))
    }

    #[test]
    fn matches_table_shows_all_three_prices() {
        let table = matches_table(&sample_matches());

        let header = row_containing(&table, "Match");
        for column in ["ID", "1", "X", "2"] {
            assert!(header.contains(column), "header {header:?} lacks {column}");
        }

        let row = row_containing(&table, "Bayern Munich vs Borussia Dortmund");
        assert!(row.contains("1.50"));
        assert!(row.contains("4.00"));
        assert!(row.contains("6.00"));
        assert!(row_containing(&table, "Juventus vs AC Milan").contains("2.80"));
    }

    #[test]
    fn slip_table_keeps_slip_order() {
        let catalog = MatchCatalog::from(sample_matches());
        let mut slip = Slip::new();
        slip.select(&catalog, &MatchId::from(3), Outcome::Away).unwrap();
        slip.select(&catalog, &MatchId::from(2), Outcome::Draw).unwrap();

        let table = slip_table(slip.selections());

        let united = table.find("Manchester United vs Liverpool FC").unwrap();
        let madrid = table.find("Real Madrid vs FC Barcelona").unwrap();
        assert!(united < madrid);
        assert!(row_containing(&table, "Real Madrid").contains("3.50"));
        assert!(row_containing(&table, "Manchester United").contains("1.90"));
        assert!(table.contains("Bet"));
    }

    #[test]
    fn selection_line_uses_outcome_code() {
        let catalog = MatchCatalog::from(sample_matches());
        let mut slip = Slip::new();
        let s = slip
            .select(&catalog, &MatchId::from(2), Outcome::Draw)
            .unwrap();

        assert_eq!(selection_line(s), "Real Madrid vs FC Barcelona  Bet: X @ 3.50");
    }
}
