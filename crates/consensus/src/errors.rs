// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sharefit_polynomial::PolynomialError;
use thiserror::Error;

/// Errors that abort the search for one problem instance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    /// Fewer shares than the threshold requires
    #[error("Not enough shares: have {have}, need {need}")]
    InsufficientShares { have: usize, need: usize },

    /// A threshold of zero determines no polynomial
    #[error("Invalid threshold: k must be at least 1")]
    InvalidThreshold,

    /// Interpolation failure inside a subset
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, ConsensusError>;
