// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lexicographic enumeration of `k`-subsets of `0..n`.

use itertools::Itertools;

/// Every strictly increasing index tuple of length `k` drawn from `0..n`, in lexicographic
/// order.
///
/// Yields `C(n, k)` items. `k == 0` or `k > n` yields nothing. Cloning the iterator
/// restarts enumeration from the clone's position.
pub fn subsets(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>> + Clone {
    (k > 0)
        .then(|| (0..n).combinations(k))
        .into_iter()
        .flatten()
}

/// `C(n, k)`, or `None` if it does not fit in a `u128`.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<Vec<usize>> = subsets(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(subsets(3, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2]]);
        assert_eq!(subsets(5, 1).count(), 5);
        assert_eq!(subsets(3, 0).count(), 0);
        assert_eq!(subsets(2, 3).count(), 0);
        assert_eq!(subsets(0, 0).count(), 0);
    }

    #[test]
    fn test_fused_and_restartable() {
        let mut combinations = subsets(3, 2).fuse();
        let restart = combinations.clone();
        assert_eq!(combinations.by_ref().count(), 3);
        assert_eq!(combinations.next(), None);
        assert_eq!(combinations.next(), None);
        assert_eq!(restart.count(), 3);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 2), Some(6));
        assert_eq!(binomial(10, 3), Some(120));
        assert_eq!(binomial(10, 0), Some(1));
        assert_eq!(binomial(3, 5), Some(0));
        assert_eq!(binomial(60, 30), Some(118264581564861424));
        assert_eq!(binomial(1000, 500), None);
    }

    proptest! {
        #[test]
        fn enumeration_matches_binomial(n in 0usize..12, k in 1usize..6) {
            let all: Vec<Vec<usize>> = subsets(n, k).collect();
            prop_assert_eq!(all.len() as u128, binomial(n, k).unwrap());
            for pair in all.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for combination in &all {
                prop_assert_eq!(combination.len(), k);
                prop_assert!(combination.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(combination.iter().all(|&i| i < n));
            }
        }
    }
}
