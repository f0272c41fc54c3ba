//! Persistence contracts: what is saved comes back, what is broken is repaired.

use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use yams::domain::ports::SessionRepository;
use yams::infrastructure::JsonSessionRepository;
use yams::{BoardGroup, BoardRef, CategoryId, ScorecardUseCase, SessionDefaults};

/// CONTRACT: every accepted edit survives a restart.
#[test]
fn contract_edits_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");

    {
        let repo = Arc::new(JsonSessionRepository::with_path(path.clone()));
        let mut card = ScorecardUseCase::open(repo, &SessionDefaults::default());
        card.set_entry(&BoardRef::Position(2), CategoryId::Fives, "20")
            .unwrap();
        card.toggle_crossed(&BoardRef::Position(2), CategoryId::Ones)
            .unwrap();
        card.switch_mode(BoardGroup::Multiplayer);
        card.create_board(Some("Alice"));
    }

    let repo = Arc::new(JsonSessionRepository::with_path(path));
    let mut card = ScorecardUseCase::open(repo, &SessionDefaults::default());
    assert_eq!(card.mode(), BoardGroup::Multiplayer);
    assert_eq!(card.boards()[0].name(), "Alice");

    card.switch_mode(BoardGroup::Multipiste);
    let track = card.resolve(&BoardRef::Position(2)).unwrap();
    assert_eq!(track.name(), "Montée");
    assert_eq!(track.entry(CategoryId::Fives), Some(20));
    assert!(track.is_crossed(CategoryId::Ones));
}

/// CONTRACT: a rejected entry never reaches the store.
#[test]
fn contract_rejected_entry_is_not_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let repo = Arc::new(JsonSessionRepository::with_path(path.clone()));
    let mut card = ScorecardUseCase::open(repo, &SessionDefaults::default());

    card.set_entry(&BoardRef::Position(1), CategoryId::Ones, "9")
        .unwrap();
    assert!(!path.exists());
}

/// CONTRACT: a legacy document (plain board list) loads into multipiste.
#[test]
fn contract_legacy_document_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(
        &path,
        r#"{
  "boards": [
    {"id": "board-old", "name": "  ", "entries": {"ones": 3, "chance": " 17.6 ", "twos": 0},
     "crossed": {"sixes": 1, "fives": ""}, "createdAt": 1700000000000},
    {"name": "Libre", "entries": {"threeKind": -12}}
  ]
}"#,
    )
    .unwrap();

    let repo = JsonSessionRepository::with_path(path);
    let session = repo.load().unwrap().unwrap();
    assert_eq!(session.mode(), BoardGroup::Multipiste);

    let boards = session.boards(BoardGroup::Multipiste);
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].id().as_str(), "board-old");
    assert_eq!(boards[0].name(), "J1");
    assert_eq!(boards[0].entry(CategoryId::Ones), Some(3));
    assert_eq!(boards[0].entry(CategoryId::Chance), Some(18));
    assert_eq!(boards[0].entry(CategoryId::Twos), None);
    assert!(boards[0].is_crossed(CategoryId::Sixes));
    assert!(!boards[0].is_crossed(CategoryId::Fives));
    assert_eq!(boards[0].created_at().timestamp_millis(), 1_700_000_000_000);
    assert!(boards[1].id().as_str().starts_with("board-"));
    assert_eq!(boards[1].entry(CategoryId::ThreeKind), None);
    assert!(session.boards(BoardGroup::Multiplayer).is_empty());
}

/// CONTRACT: a document that cannot be repaired falls back to defaults.
#[test]
fn contract_garbage_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, r#"{"boards": 42}"#).unwrap();

    let repo = Arc::new(JsonSessionRepository::with_path(path));
    let card = ScorecardUseCase::open(repo, &SessionDefaults::default());
    assert_eq!(card.mode(), BoardGroup::Multipiste);
    assert_eq!(card.boards().len(), 4);
}

/// CONTRACT: saved documents keep both groups and every category key.
#[test]
fn contract_saved_document_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let repo = Arc::new(JsonSessionRepository::with_path(path.clone()));
    let mut card = ScorecardUseCase::open(repo, &SessionDefaults::default());
    card.set_entry(&BoardRef::Position(1), CategoryId::Chance, "12")
        .unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["mode"], "multipiste");
    assert_eq!(doc["boards"]["multipiste"].as_array().unwrap().len(), 4);
    assert_eq!(doc["boards"]["multiplayer"].as_array().unwrap().len(), 0);
    let first = &doc["boards"]["multipiste"][0];
    assert_eq!(first["type"], "multipiste");
    assert_eq!(first["entries"]["chance"], 12);
    assert!(first["entries"]["ones"].is_null());
    assert_eq!(first["crossed"]["ones"], false);
}
