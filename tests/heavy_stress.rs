#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, SeedableRng};
use subset_sum_dp::strategies::{RollingPair, SingleVector, Table};
use subset_sum_dp::utils::random_elements;
use subset_sum_dp::{SubsetSumSolver, SubsetSumStrategy};

#[test]
fn heavy_seeded_two_thousand_elements() {
    let mut rng = StdRng::seed_from_u64(123);
    let elements = random_elements(&mut rng, 2_000, -65_000..65_000);
    let pair = RollingPair::default().solve(&elements, 0).unwrap();
    let single = SingleVector::default().solve(&elements, 0).unwrap();
    assert_eq!(pair.reachable, single.reachable);
    assert_eq!(
        SubsetSumSolver::default().decide(&elements, 0).unwrap(),
        pair.reachable
    );
}

#[test]
fn heavy_full_scan_without_solution() {
    // All positive with target 0: nothing short-circuits.
    let mut rng = StdRng::seed_from_u64(7);
    let elements = random_elements(&mut rng, 300, 1..1_000);
    let table = Table::default().solve(&elements, 0).unwrap();
    let pair = RollingPair::default().solve(&elements, 0).unwrap();
    let single = SingleVector::default().solve(&elements, 0).unwrap();
    assert!(!table.reachable && !pair.reachable && !single.reachable);
    assert_eq!(table.stats.rows, 300);
    assert!(single.stats.cells <= pair.stats.cells);
}
