use std::collections::BTreeSet;

/// Sums of all non-empty subsets, built element by element.
pub fn reachable_sums(elements: &[i64]) -> BTreeSet<i64> {
    let mut sums = BTreeSet::new();
    for &e in elements {
        let prev: Vec<i64> = sums.iter().copied().collect();
        sums.insert(e);
        for s in prev {
            sums.insert(s + e);
        }
    }
    sums
}

pub fn reference(elements: &[i64], target: i64) -> bool {
    reachable_sums(elements).contains(&target)
}
