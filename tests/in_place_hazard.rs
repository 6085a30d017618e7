//! The in-place single vector reads cells written earlier in the same pass.
//! It is kept for benchmarking only; these tests pin down how it differs.

mod common;

use common::reference;
use proptest::prelude::*;
use subset_sum_dp::strategies::{RollingPair, SingleVector};
use subset_sum_dp::utils::DEFAULT_MAX_CELLS;
use subset_sum_dp::SubsetSumStrategy;

fn in_place(elements: &[i64], target: i64) -> bool {
    SingleVector::in_place(DEFAULT_MAX_CELLS)
        .solve(elements, target)
        .unwrap()
        .reachable
}

#[test]
fn reuses_current_element_on_adversarial_input() {
    // Reachable: -4, 2, -2. The in-place scan also finds -2 + 2 = 0.
    let elements = [-4, 2];
    assert!(!reference(&elements, 0));
    assert!(!RollingPair::default().solve(&elements, 0).unwrap().reachable);
    assert!(!SingleVector::default().solve(&elements, 0).unwrap().reachable);
    assert!(in_place(&elements, 0));
}

#[test]
fn can_reuse_one_element_many_times() {
    // -6 + 2 + 2 + 2
    let elements = [-6, 2];
    assert!(!reference(&elements, 0));
    assert!(!SingleVector::default().solve(&elements, 0).unwrap().reachable);
    assert!(in_place(&elements, 0));
}

proptest! {
    #[test]
    fn never_misses_a_true_answer(
        elements in prop::collection::vec(-20i64..20, 0..12),
        target in -40i64..40,
    ) {
        if reference(&elements, target) {
            prop_assert!(in_place(&elements, target));
        }
    }
}
