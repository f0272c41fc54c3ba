//! Scenario: scoring a single board
//!
//! Journey: a player fills one board slot by slot, makes mistakes, forfeits
//! slots and watches the totals.

use yams::domain::services::BONUS_POINTS;
use yams::{BoardRef, CategoryId, EntryOutcome};

use crate::common::*;

fn first() -> BoardRef {
    BoardRef::Position(1)
}

/// SCENARIO: a valid upper entry is stored and summed
#[test]
fn scenario_enter_ones() {
    let mut card = scorecard();
    let outcome = card.set_entry(&first(), CategoryId::Ones, "4").unwrap();
    assert_eq!(outcome, EntryOutcome::Accepted(4));

    let board = card.resolve(&first()).unwrap();
    assert_eq!(board.entry(CategoryId::Ones), Some(4));
    assert_eq!(card.totals(&first()).unwrap().upper_sum, 4);
}

/// SCENARIO: an impossible upper entry is flagged and not stored
#[test]
fn scenario_reject_too_many_ones() {
    let mut card = scorecard();
    let outcome = card.set_entry(&first(), CategoryId::Ones, "7").unwrap();
    assert!(matches!(outcome, EntryOutcome::Rejected(_)));
    assert_eq!(card.resolve(&first()).unwrap().entry(CategoryId::Ones), None);
}

/// SCENARIO: typing a previous valid value, then a bad one, keeps the good one
#[test]
fn scenario_rejection_keeps_previous_value() {
    let mut card = scorecard();
    card.set_entry(&first(), CategoryId::Threes, "9").unwrap();
    card.set_entry(&first(), CategoryId::Threes, "10").unwrap();
    assert_eq!(card.resolve(&first()).unwrap().entry(CategoryId::Threes), Some(9));
}

/// SCENARIO: full house is toggled on and off
#[test]
fn scenario_full_house_toggle() {
    let mut card = scorecard();
    card.toggle_fixed(&first(), CategoryId::FullHouse, false).unwrap();
    assert_eq!(card.resolve(&first()).unwrap().entry(CategoryId::FullHouse), Some(25));

    card.toggle_fixed(&first(), CategoryId::FullHouse, false).unwrap();
    assert_eq!(card.resolve(&first()).unwrap().entry(CategoryId::FullHouse), None);

    // Typing the exact points works too
    let outcome = card.set_entry(&first(), CategoryId::FullHouse, "25").unwrap();
    assert_eq!(outcome, EntryOutcome::Accepted(25));
}

/// SCENARIO: crossing a scored slot drops its points
#[test]
fn scenario_cross_scored_sixes() {
    let mut card = scorecard();
    card.set_entry(&first(), CategoryId::Sixes, "24").unwrap();
    let before = card.totals(&first()).unwrap().upper_sum;

    card.toggle_crossed(&first(), CategoryId::Sixes).unwrap();
    let board = card.resolve(&first()).unwrap();
    assert!(board.is_crossed(CategoryId::Sixes));
    assert_eq!(board.entry(CategoryId::Sixes), None);
    assert_eq!(card.totals(&first()).unwrap().upper_sum, before - 24);
}

/// SCENARIO: a perfect upper section earns the bonus
#[test]
fn scenario_perfect_upper_section() {
    let mut card = scorecard();
    for (id, raw) in [
        (CategoryId::Ones, "6"),
        (CategoryId::Twos, "12"),
        (CategoryId::Threes, "18"),
        (CategoryId::Fours, "24"),
        (CategoryId::Fives, "30"),
        (CategoryId::Sixes, "36"),
    ] {
        assert!(card.set_entry(&first(), id, raw).unwrap().is_accepted());
    }

    let totals = card.totals(&first()).unwrap();
    assert_eq!(totals.upper_sum, 126);
    assert_eq!(totals.bonus, BONUS_POINTS);
    assert_eq!(totals.upper_total, 161);
}

/// SCENARIO: a whole game, upper and lower
#[test]
fn scenario_complete_game() {
    let mut card = scorecard();
    let b = first();
    for (id, raw) in [
        (CategoryId::Ones, "3"),
        (CategoryId::Twos, "6"),
        (CategoryId::Threes, "9"),
        (CategoryId::Fours, "12"),
        (CategoryId::Fives, "15"),
        (CategoryId::Sixes, "18"),
        (CategoryId::ThreeKind, "15"),
        (CategoryId::FourKind, "24"),
        (CategoryId::Chance, "22"),
    ] {
        assert!(card.set_entry(&b, id, raw).unwrap().is_accepted(), "{} {}", id, raw);
    }
    card.toggle_fixed(&b, CategoryId::SmallStraight, false).unwrap();
    card.toggle_fixed(&b, CategoryId::Yahtzee, true).unwrap();
    card.toggle_crossed(&b, CategoryId::FullHouse).unwrap();
    card.toggle_fixed(&b, CategoryId::LargeStraight, false).unwrap();

    let t = card.totals(&b).unwrap();
    assert_eq!(t.upper_sum, 63);
    assert_eq!(t.bonus, 35);
    assert_eq!(t.lower_sum, 15 + 24 + 22 + 30 + 40);
    assert_eq!(t.grand_total, 63 + 35 + 131);

    insta::assert_json_snapshot!(t, @r###"
    {
      "upperSum": 63,
      "upperComplete": true,
      "bonusAdvance": 0,
      "remainingAdvancePotential": 0,
      "bonusStatus": {
        "status": "earned"
      },
      "bonus": 35,
      "upperTotal": 98,
      "lowerSum": 131,
      "grandTotal": 229
    }
    "###);
}
