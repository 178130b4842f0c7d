//! Set-overlap helpers shared by the individual factors.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Jaccard index `|a ∩ b| / |a ∪ b|` of two sets.
///
/// Returns `0.0` when either set is empty, so a missing signal never counts
/// as agreement.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "set sizes convert to a ratio"
)]
pub(crate) fn jaccard<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    shared as f64 / union as f64
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|&item| item.to_owned()).collect()
    }

    #[rstest]
    #[case(&["a"], &["a"], 1.0)]
    #[case(&["a", "b"], &["a"], 0.5)]
    #[case(&["a", "b"], &["c", "d"], 0.0)]
    #[case(&["a", "b", "c"], &["b", "c", "d"], 0.5)]
    #[case(&[], &["a"], 0.0)]
    #[case(&[], &[], 0.0)]
    fn jaccard_scenarios(#[case] a: &[&str], #[case] b: &[&str], #[case] expected: f64) {
        let forward = jaccard(&set(a), &set(b));
        let backward = jaccard(&set(b), &set(a));
        assert!((forward - expected).abs() < 1e-12);
        assert!((forward - backward).abs() < 1e-12);
    }
}
