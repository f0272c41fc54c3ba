//! Property tests for crossing precedence.

use proptest::prelude::*;

use yams::domain::services::{apply_entry, toggle_crossed, toggle_fixed};
use yams::{validate, Board, BoardGroup, CategoryId, CellState, EntryOutcome};

#[derive(Debug, Clone)]
enum Op {
    Enter(CategoryId, String),
    Cross(CategoryId),
    Fixed(CategoryId, bool),
}

fn any_op() -> impl Strategy<Value = Op> {
    let id = proptest::sample::select(CategoryId::ALL.to_vec());
    prop_oneof![
        (id.clone(), "[0-9]{0,3}").prop_map(|(id, raw)| Op::Enter(id, raw)),
        id.clone().prop_map(Op::Cross),
        (id, any::<bool>()).prop_map(|(id, cross)| Op::Fixed(id, cross)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a crossed slot never exposes a value, whatever the edit sequence.
    #[test]
    fn property_crossed_slots_hold_no_value(ops in proptest::collection::vec(any_op(), 0..40)) {
        let mut board = Board::new("Libre", "J1", BoardGroup::Multipiste);
        for op in ops {
            match op {
                Op::Enter(id, raw) => {
                    let before = board.cell(id);
                    let outcome = validate(id.category(), &raw);
                    let after = apply_entry(&mut board, id, &outcome);
                    match outcome {
                        EntryOutcome::Rejected(_) => prop_assert_eq!(after, before),
                        _ => prop_assert!(!after.is_crossed()),
                    }
                }
                Op::Cross(id) => {
                    toggle_crossed(&mut board, id);
                }
                Op::Fixed(id, cross) => {
                    let before = board.cell(id);
                    if toggle_fixed(&mut board, id, cross).is_err() {
                        prop_assert_eq!(board.cell(id), before);
                    }
                }
            }
            for id in CategoryId::ALL {
                let crossed = board.is_crossed(id);
                prop_assert!(!(crossed && board.entry(id).is_some()));
            }
        }
    }

    /// PROPERTY: crossing twice leaves the slot open.
    #[test]
    fn property_double_cross_opens(id in proptest::sample::select(CategoryId::ALL.to_vec()), v in 1u16..=30) {
        let mut board = Board::new("Libre", "J1", BoardGroup::Multipiste);
        board.set_cell(id, CellState::Scored(v));
        toggle_crossed(&mut board, id);
        prop_assert_eq!(toggle_crossed(&mut board, id), CellState::Open);
    }
}
