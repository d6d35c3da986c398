// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Robust reconstruction of a polynomial constant term.
//!
//! Given `n ≥ k` shares of a degree `k-1` polynomial, an unknown subset of which may be
//! corrupted, every size-`k` subset is interpolated and scored by how many of the `n`
//! shares it reproduces exactly. The first subset (in lexicographic index order) with the
//! highest score wins and its value at `x = 0` is reported.
//!
//! The search is exhaustive: `C(n, k)` subsets, each scored with `n` exact evaluations.

pub mod combinations;
pub mod errors;
pub mod instance;
pub mod search;
pub mod strategy;

pub use combinations::{binomial, subsets};
pub use errors::{ConsensusError, SearchResult};
pub use instance::ProblemInstance;
pub use search::{best_fit, best_fit_parallel, interpolate_smallest, ConsensusResult};
pub use strategy::{solve, SearchStrategy, SolveOptions};
