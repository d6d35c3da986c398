// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One `(x, y)` point of an unknown polynomial.
///
/// `x` is a small signed coordinate, `y` an arbitrary precision value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Share {
    pub x: i64,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<Y: Into<BigInt>> From<(i64, Y)> for Share {
    fn from((x, y): (i64, Y)) -> Self {
        Share::new(x, y)
    }
}
