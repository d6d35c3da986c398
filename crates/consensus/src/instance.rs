// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sharefit_polynomial::Share;

/// A threshold `k` together with the shares collected for one polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemInstance {
    k: usize,
    shares: Vec<Share>,
}

impl ProblemInstance {
    pub fn new(k: usize, shares: Vec<Share>) -> Self {
        Self { k, shares }
    }

    /// Minimum number of shares that determine the polynomial.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn n(&self) -> usize {
        self.shares.len()
    }
}
