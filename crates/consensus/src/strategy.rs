// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::SearchResult;
use crate::instance::ProblemInstance;
use crate::search::{best_fit, best_fit_parallel, interpolate_smallest, ConsensusResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which reconstruction to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchStrategy {
    /// Exhaustive inlier maximisation over all size-`k` subsets
    #[default]
    Consensus,
    /// Interpolate the `k` shares with the smallest x-coordinates
    Smallest,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Consensus => write!(f, "consensus"),
            SearchStrategy::Smallest => write!(f, "smallest"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "consensus" => Ok(SearchStrategy::Consensus),
            "smallest" => Ok(SearchStrategy::Smallest),
            other => Err(format!(
                "unknown strategy '{other}', expected 'consensus' or 'smallest'"
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub strategy: SearchStrategy,
    /// Score consensus subsets on the rayon pool. Ignored by `Smallest`.
    pub parallel: bool,
}

/// Reconstructs the constant term of `instance` with the selected strategy.
pub fn solve(instance: &ProblemInstance, options: SolveOptions) -> SearchResult<ConsensusResult> {
    match (options.strategy, options.parallel) {
        (SearchStrategy::Consensus, false) => best_fit(instance.shares(), instance.k()),
        (SearchStrategy::Consensus, true) => best_fit_parallel(instance.shares(), instance.k()),
        (SearchStrategy::Smallest, _) => interpolate_smallest(instance.shares(), instance.k()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use sharefit_polynomial::Share;

    fn instance() -> ProblemInstance {
        // 5 + 3x with x = 2 corrupted
        ProblemInstance::new(
            2,
            vec![
                Share::new(1, 8),
                Share::new(2, 1000),
                Share::new(3, 14),
                Share::new(4, 17),
            ],
        )
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("consensus".parse(), Ok(SearchStrategy::Consensus));
        assert_eq!("Smallest".parse(), Ok(SearchStrategy::Smallest));
        assert!("ransac".parse::<SearchStrategy>().is_err());
        assert_eq!(SearchStrategy::Smallest.to_string(), "smallest");
    }

    #[test]
    fn test_solve_dispatch() {
        let instance = instance();
        let consensus = solve(&instance, SolveOptions::default()).unwrap();
        assert_eq!(consensus.constant_term, BigInt::from(5));
        assert_eq!(consensus.inliers, 3);

        let parallel = solve(
            &instance,
            SolveOptions {
                strategy: SearchStrategy::Consensus,
                parallel: true,
            },
        )
        .unwrap();
        assert_eq!(parallel, consensus);

        let smallest = solve(
            &instance,
            SolveOptions {
                strategy: SearchStrategy::Smallest,
                parallel: false,
            },
        )
        .unwrap();
        assert_eq!(smallest.subset, vec![0, 1]);
        assert_eq!(smallest.inliers, 2);
    }
}
