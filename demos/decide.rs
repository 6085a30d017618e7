//! Example: deciding subset sums through the selector.
//!
//! Run with:
//! `cargo run --example decide`

use rand::{rngs::StdRng, SeedableRng};
use subset_sum_dp::utils::random_elements;
use subset_sum_dp::{decide_subset_sum_with_witness, SolverBuilder, SubsetSumError};

fn main() -> Result<(), SubsetSumError> {
    let samples: [&[i64]; 2] = [&[-1, 10, 5, 3, 2, 1], &[-2, -1, 5, 5, -1, 10, 4]];
    for elements in samples {
        let (found, witness) = decide_subset_sum_with_witness(elements, 0)?;
        println!("{elements:?}: reachable={found}, witness={witness:?}");
    }

    let solver = SolverBuilder::new().with_naive_threshold(20).build()?;
    let mut rng = StdRng::seed_from_u64(123);
    let elements = random_elements(&mut rng, 200, -1_000..1_000);
    let report = solver.decide_report(&elements, 0)?;
    println!(
        "200 seeded elements: reachable={} via {} ({} rows, {} cells)",
        report.decision.reachable,
        report.strategy.label(),
        report.decision.stats.rows,
        report.decision.stats.cells
    );
    Ok(())
}
