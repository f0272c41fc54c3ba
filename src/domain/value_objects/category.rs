//! Category catalog - the 13 fixed scoring rows of a Yams sheet
//!
//! - Upper section: `ones` .. `sixes`, scored as the total of one face
//! - Lower section: three/four of a kind, the four fixed-score combinations, chance
//!
//! The catalog order is significant: totals and the bonus test walk the upper
//! slice, and boards store one cell per catalog position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YamsError;

/// Number of scoring categories on a sheet.
pub const CATEGORY_COUNT: usize = 13;

/// Number of upper-section categories (faces 1..=6).
pub const UPPER_COUNT: usize = 6;

/// Stable identifier of a category.
///
/// Serialized in camelCase (`ones`, `threeKind`, `fullHouse`, ...), which is
/// also the key format of the persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryId {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeKind,
    FourKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl CategoryId {
    /// All ids in catalog order (upper section first).
    pub const ALL: [CategoryId; CATEGORY_COUNT] = [
        CategoryId::Ones,
        CategoryId::Twos,
        CategoryId::Threes,
        CategoryId::Fours,
        CategoryId::Fives,
        CategoryId::Sixes,
        CategoryId::ThreeKind,
        CategoryId::FourKind,
        CategoryId::FullHouse,
        CategoryId::SmallStraight,
        CategoryId::LargeStraight,
        CategoryId::Yahtzee,
        CategoryId::Chance,
    ];

    /// Position in the catalog, also the cell index on a board.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Ones => "ones",
            CategoryId::Twos => "twos",
            CategoryId::Threes => "threes",
            CategoryId::Fours => "fours",
            CategoryId::Fives => "fives",
            CategoryId::Sixes => "sixes",
            CategoryId::ThreeKind => "threeKind",
            CategoryId::FourKind => "fourKind",
            CategoryId::FullHouse => "fullHouse",
            CategoryId::SmallStraight => "smallStraight",
            CategoryId::LargeStraight => "largeStraight",
            CategoryId::Yahtzee => "yahtzee",
            CategoryId::Chance => "chance",
        }
    }

    pub fn is_upper(self) -> bool {
        self.index() < UPPER_COUNT
    }

    /// Static definition of this category.
    pub fn category(self) -> &'static Category {
        &CATALOG[self.index()]
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = YamsError;

    /// Accepts the stable id in any case, with optional `-`/`_` separators
    /// (`fullHouse`, `full-house`, `FULL_HOUSE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        CategoryId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().to_lowercase() == folded)
            .ok_or_else(|| YamsError::UnknownCategory { id: s.to_string() })
    }
}

/// Validation/scoring kind of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Total of the dice showing `face` (zero to six dice).
    UpperNumeric { face: u8 },
    /// Fixed points, toggled on or off rather than typed.
    FixedScore { points: u16 },
    /// `multiplicity` identical dice, entered as their sum.
    CombinationSum { multiplicity: u8 },
    /// Free sum of the dice within `[min, max]`.
    RangeBounded { min: u16, max: u16 },
}

impl CategoryKind {
    pub fn is_fixed(&self) -> bool {
        matches!(self, CategoryKind::FixedScore { .. })
    }
}

/// One row of the score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: CategoryKind,
}

impl Category {
    /// Look up a category by raw id.
    pub fn by_id(raw: &str) -> Result<&'static Category, YamsError> {
        raw.parse::<CategoryId>().map(CategoryId::category)
    }

    /// Face value of an upper-section category.
    pub fn face(&self) -> Option<u8> {
        match self.kind {
            CategoryKind::UpperNumeric { face } => Some(face),
            _ => None,
        }
    }

    /// Points of a fixed-score category.
    pub fn fixed_points(&self) -> Option<u16> {
        match self.kind {
            CategoryKind::FixedScore { points } => Some(points),
            _ => None,
        }
    }
}

const fn upper(id: CategoryId, label: &'static str, hint: &'static str, face: u8) -> Category {
    Category {
        id,
        label,
        hint,
        kind: CategoryKind::UpperNumeric { face },
    }
}

const fn lower(id: CategoryId, label: &'static str, hint: &'static str, kind: CategoryKind) -> Category {
    Category {
        id,
        label,
        hint,
        kind,
    }
}

/// The full catalog, in display order.
pub static CATALOG: [Category; CATEGORY_COUNT] = [
    upper(CategoryId::Ones, "As", "Total des dés à 1", 1),
    upper(CategoryId::Twos, "Deux", "Total des dés à 2", 2),
    upper(CategoryId::Threes, "Trois", "Total des dés à 3", 3),
    upper(CategoryId::Fours, "Quatre", "Total des dés à 4", 4),
    upper(CategoryId::Fives, "Cinq", "Total des dés à 5", 5),
    upper(CategoryId::Sixes, "Six", "Total des dés à 6", 6),
    lower(
        CategoryId::ThreeKind,
        "Brelan",
        "Somme de trois dés identiques",
        CategoryKind::CombinationSum { multiplicity: 3 },
    ),
    lower(
        CategoryId::FourKind,
        "Carré",
        "Somme de quatre dés identiques",
        CategoryKind::CombinationSum { multiplicity: 4 },
    ),
    lower(
        CategoryId::FullHouse,
        "Full House",
        "25 points",
        CategoryKind::FixedScore { points: 25 },
    ),
    lower(
        CategoryId::SmallStraight,
        "Petite suite",
        "30 points",
        CategoryKind::FixedScore { points: 30 },
    ),
    lower(
        CategoryId::LargeStraight,
        "Grande suite",
        "40 points",
        CategoryKind::FixedScore { points: 40 },
    ),
    lower(
        CategoryId::Yahtzee,
        "Yams",
        "50 points",
        CategoryKind::FixedScore { points: 50 },
    ),
    lower(
        CategoryId::Chance,
        "Chance",
        "Somme des dés",
        CategoryKind::RangeBounded { min: 5, max: 30 },
    ),
];

/// Upper section, face order 1..=6.
pub fn upper_section() -> &'static [Category] {
    &CATALOG[..UPPER_COUNT]
}

/// Lower section, ending with chance.
pub fn lower_section() -> &'static [Category] {
    &CATALOG[UPPER_COUNT..]
}
