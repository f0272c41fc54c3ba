//! Persisted session document
//!
//! Saved shape (dual-mode):
//!
//! ```json
//! { "version": 1, "mode": "multipiste",
//!   "boards": { "multiplayer": [BoardRecord], "multipiste": [BoardRecord] } }
//! ```
//!
//! Older single-collection documents (`{ "boards": [BoardRecord] }`) are still
//! read; their boards land in the multipiste group.
//!
//! Each record is repaired field by field; a bad record never fails the whole
//! document.

use std::collections::BTreeMap;

use chrono::DateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::{cells_from_maps, now_millis, Board, Session};
use crate::domain::policies::naming::{positional_name, sanitize_name};
use crate::domain::services::clamp_entry;
use crate::domain::value_objects::{BoardGroup, BoardId, CategoryId};

/// Version written to new documents.
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredBoard<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: BoardGroup,
    name: &'a str,
    entries: BTreeMap<&'static str, Option<u16>>,
    crossed: BTreeMap<&'static str, bool>,
    created_at: i64,
}

#[derive(Debug, Serialize)]
struct StoredGroups<'a> {
    multiplayer: Vec<StoredBoard<'a>>,
    multipiste: Vec<StoredBoard<'a>>,
}

#[derive(Debug, Serialize)]
struct StoredSession<'a> {
    version: u32,
    mode: BoardGroup,
    boards: StoredGroups<'a>,
}

fn to_stored(board: &Board) -> StoredBoard<'_> {
    StoredBoard {
        id: board.id().as_str(),
        kind: board.group(),
        name: board.name(),
        entries: CategoryId::ALL
            .iter()
            .map(|id| (id.as_str(), board.entry(*id)))
            .collect(),
        crossed: CategoryId::ALL
            .iter()
            .map(|id| (id.as_str(), board.is_crossed(*id)))
            .collect(),
        created_at: board.created_at().timestamp_millis(),
    }
}

/// Serialize `session` in the dual-mode shape.
pub fn encode(session: &Session) -> serde_json::Result<String> {
    let doc = StoredSession {
        version: DOCUMENT_VERSION,
        mode: session.mode(),
        boards: StoredGroups {
            multiplayer: session
                .boards(BoardGroup::Multiplayer)
                .iter()
                .map(to_stored)
                .collect(),
            multipiste: session
                .boards(BoardGroup::Multipiste)
                .iter()
                .map(to_stored)
                .collect(),
        },
    };
    serde_json::to_string_pretty(&doc)
}

/// Why a document could not be used at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    NotJson(String),
    NotAnObject,
    BadBoards,
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Malformed::NotJson(msg) => write!(f, "not valid JSON: {}", msg),
            Malformed::NotAnObject => write!(f, "document is not an object"),
            Malformed::BadBoards => write!(f, "'boards' is neither a list nor a group map"),
        }
    }
}

/// Parse and repair a stored document.
pub fn decode(raw: &str) -> Result<Session, Malformed> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Malformed::NotJson(e.to_string()))?;
    decode_value(&value)
}

pub fn decode_value(value: &Value) -> Result<Session, Malformed> {
    let doc = value.as_object().ok_or(Malformed::NotAnObject)?;

    match doc.get("boards") {
        Some(Value::Array(records)) => {
            let mut session = Session::new(BoardGroup::Multipiste);
            session.replace_group(
                BoardGroup::Multipiste,
                decode_group(records, BoardGroup::Multipiste),
            );
            Ok(session)
        }
        Some(Value::Object(groups)) => {
            let mode = doc
                .get("mode")
                .and_then(Value::as_str)
                .and_then(BoardGroup::from_stored)
                .unwrap_or_default();
            let mut session = Session::new(mode);
            for group in BoardGroup::ALL {
                let boards = groups
                    .get(group.as_str())
                    .and_then(Value::as_array)
                    .map(|records| decode_group(records, group))
                    .unwrap_or_default();
                session.replace_group(group, boards);
            }
            Ok(session)
        }
        _ => Err(Malformed::BadBoards),
    }
}

fn decode_group(records: &[Value], group: BoardGroup) -> Vec<Board> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| decode_board(record, i, group))
        .collect()
}

/// Repair one record. Its `type` is ignored: a board belongs to the group it
/// is stored under.
pub fn decode_board(record: &Value, index: usize, group: BoardGroup) -> Board {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or(&empty);

    let id = fields
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(BoardId::from)
        .unwrap_or_else(BoardId::generate);

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .and_then(sanitize_name)
        .unwrap_or_else(|| positional_name(index));

    let created_at = fields
        .get("createdAt")
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .and_then(|n| DateTime::from_timestamp_millis(n as i64))
        .unwrap_or_else(now_millis);

    let entries_src = fields.get("entries").and_then(Value::as_object);
    let crossed_src = fields.get("crossed").and_then(Value::as_object);

    let mut entries = BTreeMap::new();
    let mut crossed = BTreeMap::new();
    for category in CategoryId::ALL {
        let key = category.as_str();
        let is_crossed = crossed_src
            .and_then(|m| m.get(key))
            .map(is_truthy)
            .unwrap_or(false);
        crossed.insert(category, is_crossed);
        entries.insert(
            category,
            entries_src.and_then(|m| m.get(key)).and_then(stored_entry),
        );
    }

    Board::restore(id, name, group, cells_from_maps(&entries, &crossed), created_at)
}

/// A stored entry: a number or numeric string, finite and non-negative,
/// rounded and clamped like typed input. Zero reads as absent.
fn stored_entry(value: &Value) -> Option<u16> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    match clamp_entry(n) {
        0 => None,
        v => Some(v),
    }
}

/// Loose truthiness for crossed marks written by older front ends.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
