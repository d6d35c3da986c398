// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::combinations::{binomial, subsets};
use crate::errors::{ConsensusError, SearchResult};
use num_bigint::BigInt;
use rayon::iter::{ParallelBridge, ParallelIterator};
use sharefit_polynomial::{evaluate_fraction, Share};
use tracing::{debug, trace};

/// Outcome of a reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusResult {
    /// Number of shares, among all `n`, reproduced exactly by the winning subset.
    pub inliers: usize,
    /// The winning subset's value at `x = 0`.
    pub constant_term: BigInt,
    /// Indices of the winning subset, ascending.
    pub subset: Vec<usize>,
    /// Whether the division producing `constant_term` was exact.
    pub exact: bool,
}

/// A scored subset. `ordinal` is its position in lexicographic enumeration.
#[derive(Debug)]
struct Candidate {
    ordinal: usize,
    subset: Vec<usize>,
    inliers: usize,
}

/// More inliers wins; on a tie the earlier subset is kept.
fn prefer(a: Candidate, b: Candidate) -> Candidate {
    match a.inliers.cmp(&b.inliers) {
        std::cmp::Ordering::Greater => a,
        std::cmp::Ordering::Less => b,
        std::cmp::Ordering::Equal if a.ordinal <= b.ordinal => a,
        std::cmp::Ordering::Equal => b,
    }
}

/// Keeps the error of the earliest failing subset, matching the sequential search.
fn merge(
    a: Result<Candidate, (usize, ConsensusError)>,
    b: Result<Candidate, (usize, ConsensusError)>,
) -> Result<Candidate, (usize, ConsensusError)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok(prefer(a, b)),
        (Err(a), Err(b)) => Err(if a.0 <= b.0 { a } else { b }),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
    }
}

fn check_threshold(shares: &[Share], k: usize) -> SearchResult<()> {
    if k == 0 {
        return Err(ConsensusError::InvalidThreshold);
    }
    if shares.len() < k {
        return Err(ConsensusError::InsufficientShares {
            have: shares.len(),
            need: k,
        });
    }
    Ok(())
}

fn select(shares: &[Share], indices: &[usize]) -> Vec<Share> {
    indices.iter().map(|&i| shares[i].clone()).collect()
}

/// Counts the shares whose `y` equals the subset's interpolation at their `x`.
fn count_inliers(subset: &[Share], shares: &[Share]) -> SearchResult<usize> {
    let mut inliers = 0;
    for share in shares {
        if evaluate_fraction(subset, share.x)?.matches(&share.y) {
            inliers += 1;
        }
    }
    Ok(inliers)
}

fn score(shares: &[Share], ordinal: usize, subset: Vec<usize>) -> SearchResult<Candidate> {
    let inliers = count_inliers(&select(shares, &subset), shares)?;
    trace!(ordinal, ?subset, inliers, "Scored subset");
    Ok(Candidate {
        ordinal,
        subset,
        inliers,
    })
}

fn finish(shares: &[Share], winner: Candidate) -> SearchResult<ConsensusResult> {
    let fraction = evaluate_fraction(&select(shares, &winner.subset), 0)?;
    Ok(ConsensusResult {
        inliers: winner.inliers,
        constant_term: fraction.quotient(),
        subset: winner.subset,
        exact: fraction.is_integral(),
    })
}

/// Finds the size-`k` subset of `shares` consistent with the most shares and returns its
/// value at `x = 0`.
///
/// Subsets are visited in lexicographic index order and a later subset replaces the best
/// only with a strictly higher inlier count, so the first maximal subset wins.
///
/// # Errors
///
/// * `InvalidThreshold` if `k == 0`.
/// * `InsufficientShares` if `shares.len() < k`.
/// * `Polynomial(DegenerateInterpolation)` if a subset contains a repeated x-coordinate.
pub fn best_fit(shares: &[Share], k: usize) -> SearchResult<ConsensusResult> {
    check_threshold(shares, k)?;
    debug!(
        n = shares.len(),
        k,
        subsets = ?binomial(shares.len(), k),
        "Starting consensus search"
    );

    let mut best: Option<Candidate> = None;
    for (ordinal, subset) in subsets(shares.len(), k).enumerate() {
        let candidate = score(shares, ordinal, subset)?;
        best = match best {
            Some(current) if candidate.inliers <= current.inliers => Some(current),
            _ => {
                debug!(
                    ordinal,
                    subset = ?candidate.subset,
                    inliers = candidate.inliers,
                    "New best subset"
                );
                Some(candidate)
            }
        };
    }

    // check_threshold guarantees at least one subset
    let winner = best.ok_or(ConsensusError::InsufficientShares {
        have: shares.len(),
        need: k,
    })?;
    finish(shares, winner)
}

/// Same result as [`best_fit`], scoring subsets on the rayon thread pool.
///
/// Every candidate carries its enumeration ordinal and the reduction prefers the lower
/// ordinal on equal inlier counts, so the winner does not depend on scheduling. Failures
/// are merged the same way: the error reported is that of the earliest failing subset.
pub fn best_fit_parallel(shares: &[Share], k: usize) -> SearchResult<ConsensusResult> {
    check_threshold(shares, k)?;
    debug!(
        n = shares.len(),
        k,
        subsets = ?binomial(shares.len(), k),
        "Starting parallel consensus search"
    );

    let winner = subsets(shares.len(), k)
        .enumerate()
        .par_bridge()
        .map(|(ordinal, subset)| score(shares, ordinal, subset).map_err(|e| (ordinal, e)))
        .reduce_with(merge)
        .unwrap_or(Err((
            0,
            ConsensusError::InsufficientShares {
                have: shares.len(),
                need: k,
            },
        )))
        .map_err(|(_, e)| e)?;

    debug!(
        ordinal = winner.ordinal,
        subset = ?winner.subset,
        inliers = winner.inliers,
        "Best subset"
    );
    finish(shares, winner)
}

/// Non-robust reconstruction: interpolates the `k` shares with the smallest x-coordinates.
///
/// The inlier count is reported for the chosen subset but plays no part in the choice.
pub fn interpolate_smallest(shares: &[Share], k: usize) -> SearchResult<ConsensusResult> {
    check_threshold(shares, k)?;

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by_key(|&i| shares[i].x);
    let mut subset: Vec<usize> = order.into_iter().take(k).collect();
    subset.sort_unstable();

    let inliers = count_inliers(&select(shares, &subset), shares)?;
    debug!(?subset, inliers, "Interpolating smallest x-coordinates");
    finish(
        shares,
        Candidate {
            ordinal: 0,
            subset,
            inliers,
        },
    )
}
