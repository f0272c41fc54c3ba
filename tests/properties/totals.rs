//! Property tests for totals.

use proptest::prelude::*;

use yams::domain::services::{AdvanceRisk, BONUS_POINTS, BONUS_THRESHOLD};
use yams::domain::value_objects::CATEGORY_COUNT;
use yams::{compute_totals, BonusStatus, CellState};

fn any_cell() -> impl Strategy<Value = CellState> {
    prop_oneof![
        Just(CellState::Open),
        Just(CellState::Crossed),
        (1u16..=999).prop_map(CellState::Scored),
    ]
}

fn any_cells() -> impl Strategy<Value = [CellState; CATEGORY_COUNT]> {
    proptest::collection::vec(any_cell(), CATEGORY_COUNT).prop_map(|v| {
        let mut cells = [CellState::Open; CATEGORY_COUNT];
        cells.copy_from_slice(&v);
        cells
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: totals add up.
    #[test]
    fn property_totals_are_consistent(cells in any_cells()) {
        let t = compute_totals(&cells);
        prop_assert_eq!(t.upper_total, t.upper_sum + t.bonus);
        prop_assert_eq!(t.grand_total, t.upper_total + t.lower_sum);
        prop_assert_eq!(t.bonus == BONUS_POINTS, t.upper_sum >= BONUS_THRESHOLD);
        prop_assert!(t.bonus == 0 || t.bonus == BONUS_POINTS);
    }

    /// PROPERTY: crossed and open slots contribute nothing.
    #[test]
    fn property_only_scored_slots_count(cells in any_cells()) {
        let expected: u32 = cells.iter().map(CellState::points).sum();
        prop_assert_eq!(compute_totals(&cells).grand_total - compute_totals(&cells).bonus, expected);
    }

    /// PROPERTY: a complete upper section is always settled.
    #[test]
    fn property_complete_upper_section_is_settled(cells in any_cells()) {
        let t = compute_totals(&cells);
        if t.upper_complete {
            prop_assert!(matches!(t.bonus_status, BonusStatus::Earned | BonusStatus::Missed));
            prop_assert_eq!(t.remaining_advance_potential, 0);
        } else {
            prop_assert!(!matches!(t.bonus_status, BonusStatus::Earned | BonusStatus::Missed));
        }
    }

    /// PROPERTY: risk classification is decided by advance and potential alone.
    #[test]
    fn property_risk_classification(advance in -200i32..200, potential in 0i32..200) {
        let risk = AdvanceRisk::classify(advance, potential);
        if advance > 0 {
            prop_assert_eq!(risk, AdvanceRisk::OnTrack);
        } else if advance + potential >= 0 {
            prop_assert_eq!(risk, AdvanceRisk::AtRisk);
        } else {
            prop_assert_eq!(risk, AdvanceRisk::Lost);
        }
    }
}
