//! Session entity - every board of the process, partitioned by group
//!
//! Only the active group is shown and summed; the other group keeps its boards
//! untouched until the mode switches back.

use std::fmt;

use crate::domain::policies::naming::{positional_name, CLASSIC_TRACKS};
use crate::domain::value_objects::{BoardGroup, BoardId, BOARD_ID_PREFIX};

use super::Board;

/// How a caller designates a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardRef {
    /// Exact id, searched in every group.
    Id(BoardId),
    /// 1-based position in the active group.
    Position(usize),
    /// Case-insensitive name in the active group.
    Name(String),
}

impl BoardRef {
    /// `board-...` is an id, a positive integer is a position, anything else a name.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with(BOARD_ID_PREFIX) {
            return BoardRef::Id(BoardId::from(trimmed));
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => BoardRef::Position(n),
            _ => BoardRef::Name(trimmed.to_string()),
        }
    }
}

impl From<&BoardId> for BoardRef {
    fn from(id: &BoardId) -> Self {
        BoardRef::Id(id.clone())
    }
}

impl fmt::Display for BoardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardRef::Id(id) => write!(f, "{}", id),
            BoardRef::Position(n) => write!(f, "#{}", n),
            BoardRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// What a fresh session looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub mode: BoardGroup,
    /// Board names created in the multipiste group.
    pub tracks: Vec<String>,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            mode: BoardGroup::Multipiste,
            tracks: CLASSIC_TRACKS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    mode: BoardGroup,
    multiplayer: Vec<Board>,
    multipiste: Vec<Board>,
}

impl Session {
    /// Empty session with `mode` active.
    pub fn new(mode: BoardGroup) -> Self {
        Self {
            mode,
            multiplayer: Vec::new(),
            multipiste: Vec::new(),
        }
    }

    /// The documented starting state: the default tracks in the multipiste
    /// group, an empty multiplayer group.
    pub fn from_defaults(defaults: &SessionDefaults) -> Self {
        let mut session = Self::new(defaults.mode);
        for (i, name) in defaults.tracks.iter().enumerate() {
            session.push(Board::new(name, &positional_name(i), BoardGroup::Multipiste));
        }
        session
    }

    pub fn mode(&self) -> BoardGroup {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BoardGroup) {
        self.mode = mode;
    }

    pub fn boards(&self, group: BoardGroup) -> &[Board] {
        match group {
            BoardGroup::Multiplayer => &self.multiplayer,
            BoardGroup::Multipiste => &self.multipiste,
        }
    }

    pub fn active_boards(&self) -> &[Board] {
        self.boards(self.mode)
    }

    fn boards_mut(&mut self, group: BoardGroup) -> &mut Vec<Board> {
        match group {
            BoardGroup::Multiplayer => &mut self.multiplayer,
            BoardGroup::Multipiste => &mut self.multipiste,
        }
    }

    /// Mutable access to the active group's boards.
    pub fn active_boards_mut(&mut self) -> &mut [Board] {
        let mode = self.mode;
        self.boards_mut(mode)
    }

    /// Append `board` to its own group.
    pub fn push(&mut self, board: Board) {
        self.boards_mut(board.group()).push(board);
    }

    /// Swap out a whole group.
    pub fn replace_group(&mut self, group: BoardGroup, boards: Vec<Board>) {
        *self.boards_mut(group) = boards;
    }

    fn locate(&self, reference: &BoardRef) -> Option<(BoardGroup, usize)> {
        match reference {
            BoardRef::Id(id) => BoardGroup::ALL.iter().find_map(|group| {
                self.boards(*group)
                    .iter()
                    .position(|b| b.id() == id)
                    .map(|i| (*group, i))
            }),
            BoardRef::Position(n) => {
                let len = self.active_boards().len();
                (*n >= 1 && *n <= len).then(|| (self.mode, n - 1))
            }
            BoardRef::Name(name) => {
                let wanted = name.to_lowercase();
                self.active_boards()
                    .iter()
                    .position(|b| b.name().to_lowercase() == wanted)
                    .map(|i| (self.mode, i))
            }
        }
    }

    pub fn get(&self, reference: &BoardRef) -> Option<&Board> {
        let (group, i) = self.locate(reference)?;
        self.boards(group).get(i)
    }

    pub fn get_mut(&mut self, reference: &BoardRef) -> Option<&mut Board> {
        let (group, i) = self.locate(reference)?;
        self.boards_mut(group).get_mut(i)
    }

    pub fn remove(&mut self, reference: &BoardRef) -> Option<Board> {
        let (group, i) = self.locate(reference)?;
        Some(self.boards_mut(group).remove(i))
    }

    /// Every board of both groups.
    pub fn all_boards(&self) -> impl Iterator<Item = &Board> {
        self.multiplayer.iter().chain(self.multipiste.iter())
    }
}
