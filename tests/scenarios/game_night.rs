//! Scenario: a game night with several players
//!
//! Journey: the table switches to multiplayer, adds players, scores a few
//! rounds, and switches back to the solo tracks which were left untouched.

use yams::domain::policies::Preset;
use yams::{BoardGroup, BoardRef, CategoryId, YamsError};

use crate::common::*;

#[test]
fn scenario_multiplayer_evening() {
    let mut card = scorecard();
    assert_eq!(card.mode(), BoardGroup::Multipiste);
    assert_eq!(card.boards().len(), 4);
    card.set_entry(&BoardRef::Name("libre".into()), CategoryId::Chance, "20")
        .unwrap();

    card.switch_mode(BoardGroup::Multiplayer);
    assert!(card.boards().is_empty());

    let alice = card.create_board(Some("Alice"));
    let second = card.create_board(None);
    assert_eq!(second.name(), "Joueur 2");
    card.rename(&BoardRef::Position(2), "Bob").unwrap();

    card.set_entry(&BoardRef::from(alice.id()), CategoryId::Sixes, "18")
        .unwrap();
    card.set_entry(&BoardRef::Name("BOB".into()), CategoryId::ThreeKind, "12")
        .unwrap();
    assert_eq!(card.session_total(), 30);

    let group = card.totals_for_group();
    assert_eq!(group.mode, BoardGroup::Multiplayer);
    assert_eq!(group.boards.len(), 2);
    assert_eq!(group.boards[1].name, "Bob");

    // Back to the tracks: the chance entry is still there, players are hidden
    card.switch_mode(BoardGroup::Multipiste);
    assert_eq!(card.boards().len(), 4);
    assert_eq!(card.session_total(), 20);
    assert!(matches!(
        card.resolve(&BoardRef::Name("Alice".into())),
        Err(YamsError::UnknownBoard { .. })
    ));

    // Ids resolve across groups
    assert_eq!(card.resolve(&BoardRef::from(alice.id())).unwrap().name(), "Alice");
}

#[test]
fn scenario_new_game_with_three_tracks() {
    let mut card = scorecard();
    card.set_entry(&BoardRef::Position(1), CategoryId::Ones, "2").unwrap();

    let boards = card.apply_preset(Preset::ThreeTracks);
    let names: Vec<&str> = boards.iter().map(|b| b.name()).collect();
    assert_eq!(names, ["Descente", "Montée", "Libre"]);
    assert_eq!(card.session_total(), 0);

    assert_eq!(card.reset_all(), 3);
    assert_eq!(card.delete_all(), 3);
    assert!(card.boards().is_empty());
}
