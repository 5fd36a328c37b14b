//! End-to-end session flows: load, pick, stake, submit.

mod support;

use parlay::adapter::outbound::fallback::FallbackSource;
use parlay::adapter::outbound::odds_api::OddsApiSource;
use parlay::application::calculator::PayoutBasis;
use parlay::application::session::Session;
use parlay::domain::{MatchId, Outcome};
use parlay::error::SubmitError;
use parlay::port::outbound::odds::CatalogSource;
use parlay::testkit::transport::{odds_body, ScriptedTransport};
use rust_decimal_macros::dec;

use support::keyed_config;

async fn sample_session(basis: PayoutBasis) -> Session {
    let mut session = Session::new(basis);
    session.refresh(&FallbackSource).await;
    session
}

#[tokio::test]
async fn three_leg_parlay_with_ten_stake() {
    let mut session = sample_session(PayoutBasis::Exact).await;
    session.select(&MatchId::from(2), Outcome::Home).unwrap();
    session.select(&MatchId::from(3), Outcome::Draw).unwrap();
    session.select(&MatchId::from(1), Outcome::Home).unwrap();
    session.set_stake("10");

    let confirmation = session.place_bet().unwrap();

    assert_eq!(
        confirmation.to_string(),
        "Bet placed successfully!\n\nTotal Odds: 12.87\nStake: 10.00\nPotential Winnings: 128.70"
    );
    assert_eq!(confirmation.selections.len(), 3);
    assert!(session.slip().is_empty());
    assert!(session.stake().is_empty());
}

#[tokio::test]
async fn empty_slip_takes_precedence_over_bad_stake() {
    let mut session = sample_session(PayoutBasis::Exact).await;
    session.set_stake("abc");

    assert_eq!(session.place_bet(), Err(SubmitError::EmptySlip));
    assert_eq!(session.stake().raw(), "abc");
}

#[tokio::test]
async fn invalid_stakes_are_rejected_and_retryable() {
    let mut session = sample_session(PayoutBasis::Exact).await;
    session.select(&MatchId::from(1), Outcome::Away).unwrap();

    for raw in ["", "abc", "-5", "0", "   "] {
        session.set_stake(raw);
        assert_eq!(session.place_bet(), Err(SubmitError::InvalidStake), "stake {raw:?}");
        assert_eq!(session.slip().len(), 1);
    }

    session.set_stake("1,000");
    let confirmation = session.place_bet().unwrap();
    assert_eq!(confirmation.potential_winnings, dec!(6000));
}

#[tokio::test]
async fn totals_show_zero_winnings_without_stake() {
    let mut session = sample_session(PayoutBasis::Exact).await;
    session.select(&MatchId::from(4), Outcome::Home).unwrap();

    let totals = session.totals();
    assert_eq!(totals.display_total_odds(), "2.50");
    assert_eq!(totals.display_stake(), "0.00");
    assert_eq!(totals.display_winnings(), "0.00");
}

#[tokio::test]
async fn displayed_odds_basis_uses_rounded_total() {
    let mut exact = sample_session(PayoutBasis::Exact).await;
    let mut displayed = sample_session(PayoutBasis::DisplayedOdds).await;
    for session in [&mut exact, &mut displayed] {
        session.select(&MatchId::from(1), Outcome::Home).unwrap();
        session.select(&MatchId::from(3), Outcome::Away).unwrap();
        session.select(&MatchId::from(2), Outcome::Draw).unwrap();
        session.set_stake("100");
    }

    // 1.5 * 1.9 * 3.5 = 9.975, shown as 9.98
    assert_eq!(exact.totals().display_winnings(), "997.50");
    assert_eq!(displayed.totals().display_winnings(), "998.00");
}

#[tokio::test]
async fn refresh_replaces_catalog_but_keeps_slip() {
    let mut session = sample_session(PayoutBasis::Exact).await;
    session.select(&MatchId::from(1), Outcome::Home).unwrap();

    let transport =
        ScriptedTransport::new().with_ok(200, odds_body(&[("e1", "Arsenal", "Chelsea")]));
    let source = OddsApiSource::new(keyed_config("https://odds.test/v4/sports"), transport);
    let notice = session.refresh(&source).await;
    assert!(notice.is_none());

    assert_eq!(session.catalog_source(), Some(CatalogSource::Remote));
    assert_eq!(session.catalog().len(), 1);
    assert_eq!(session.slip().len(), 1);
    assert_eq!(session.slip().selections()[0].home_team(), "Bayern Munich");

    // The stale pick can no longer be changed, but new picks work.
    assert!(session.select(&MatchId::from(1), Outcome::Draw).is_err());
    session.select(&MatchId::from("e1"), Outcome::Draw).unwrap();
    assert_eq!(session.totals().total_odds, dec!(4.95));
}

#[tokio::test]
async fn deselect_and_clear() {
    let mut session = sample_session(PayoutBasis::Exact).await;
    session.select(&MatchId::from(1), Outcome::Home).unwrap();
    session.select(&MatchId::from(2), Outcome::Home).unwrap();

    assert!(session.deselect(&MatchId::from(1)).is_some());
    assert!(session.deselect(&MatchId::from(1)).is_none());
    assert_eq!(session.totals().total_odds, dec!(2.20));

    session.clear_slip();
    assert_eq!(session.totals().total_odds, dec!(1));
}
