// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Coefficient form polynomials, used to produce shares.

use crate::share::Share;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// A polynomial with integer coefficients, stored highest degree first.
///
/// Reconstruction never builds one of these; they exist to generate consistent
/// share sets for sampling, tests and benchmarks.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

/// Renders as e.g. `3x^2 - x + 7`, skipping zero terms.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.coefficients.len().saturating_sub(1);
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, coeff)| (degree - i, coeff))
            .filter(|(_, coeff)| !coeff.is_zero());

        let mut empty = true;
        for (power, coeff) in terms {
            match (empty, coeff.is_negative()) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            empty = false;

            let magnitude = coeff.abs();
            if power == 0 || !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{power}")?,
            }
        }

        if empty {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending order (constant term first).
    pub fn from_ascending_coefficients(ascending_coefficients: Vec<BigInt>) -> Self {
        let mut coefficients = ascending_coefficients;
        coefficients.reverse();
        Self { coefficients }
    }

    /// Number of shares needed to determine this polynomial: `degree + 1`.
    pub fn threshold(&self) -> usize {
        self.coefficients.len().max(1)
    }

    /// The value at `x = 0`.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.last().cloned().unwrap_or_else(BigInt::zero)
    }

    /// Horner evaluation.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }

    /// Evaluates the polynomial at each of `xs`, producing one share per point.
    pub fn shares(&self, xs: &[i64]) -> Vec<Share> {
        xs.iter()
            .map(|&x| Share::new(x, self.evaluate(&BigInt::from(x))))
            .collect()
    }
}
