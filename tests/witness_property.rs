mod common;

use common::reference;
use proptest::prelude::*;
use subset_sum_dp::strategies::Table;
use subset_sum_dp::decide_subset_sum_with_witness;

proptest! {
    #[test]
    fn witness_is_a_valid_subset(
        elements in prop::collection::vec(-25i64..25, 0..14),
        target in -40i64..40,
    ) {
        let (decision, witness) = Table::default().solve_with_witness(&elements, target).unwrap();
        prop_assert_eq!(decision.reachable, reference(&elements, target));
        match witness {
            Some(indices) => {
                prop_assert!(decision.reachable);
                prop_assert!(!indices.is_empty());
                prop_assert!(indices.windows(2).all(|w| w[0] < w[1]), "indices distinct and sorted");
                prop_assert!(indices.iter().all(|&i| i < elements.len()));
                let sum: i64 = indices.iter().map(|&i| elements[i]).sum();
                prop_assert_eq!(sum, target);
            }
            None => {
                prop_assert!(!decision.reachable);
            }
        }
    }

    #[test]
    fn witness_values_sum_to_target(elements in prop::collection::vec(-25i64..25, 1..14)) {
        let (found, values) = decide_subset_sum_with_witness(&elements, 0).unwrap();
        prop_assert_eq!(found, values.is_some());
        if let Some(values) = values {
            prop_assert_eq!(values.iter().sum::<i64>(), 0);
            prop_assert!(values.len() <= elements.len());
        }
    }
}

#[test]
fn empty_input_has_no_witness() {
    assert_eq!(decide_subset_sum_with_witness(&[], 0).unwrap(), (false, None));
}

#[test]
fn zero_element_is_its_own_witness() {
    assert_eq!(decide_subset_sum_with_witness(&[0], 0).unwrap(), (true, Some(vec![0])));
}
