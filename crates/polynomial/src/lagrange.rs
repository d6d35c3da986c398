// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact Lagrange evaluation over the integers.
//!
//! The interpolating polynomial is never materialised. Each basis term `y_j · L_j(x0)` is
//! kept as a numerator/denominator pair and folded into a running fraction with
//! `N ← N·den_j + num_j·D`, `D ← D·den_j`, leaving a single division at the very end.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::share::Share;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// The unreduced value `numerator / denominator` of an interpolating polynomial at one point.
///
/// The denominator is never zero and is always positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LagrangeFraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl LagrangeFraction {
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// True when the value is an integer.
    pub fn is_integral(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Exact comparison against an integer: `N == y · D`.
    pub fn matches(&self, y: &BigInt) -> bool {
        self.numerator == y * &self.denominator
    }

    /// The value, truncated toward zero when it is not an integer.
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// The value if and only if it is an integer.
    pub fn exact_quotient(&self) -> Option<BigInt> {
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        remainder.is_zero().then_some(quotient)
    }
}

/// Evaluates the polynomial through `points` at `x0`, returning the unreduced fraction.
///
/// # Errors
///
/// * `EmptyInterpolation` when `points` is empty.
/// * `DegenerateInterpolation` when two points share an x-coordinate.
pub fn evaluate_fraction(points: &[Share], x0: i64) -> PolynomialResult<LagrangeFraction> {
    if points.is_empty() {
        return Err(PolynomialError::EmptyInterpolation);
    }

    let x0 = BigInt::from(x0);
    let mut numerator = BigInt::zero();
    let mut denominator = BigInt::one();

    for (j, p_j) in points.iter().enumerate() {
        let x_j = BigInt::from(p_j.x);
        let mut term_numerator = p_j.y.clone();
        let mut term_denominator = BigInt::one();

        for (i, p_i) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_i = BigInt::from(p_i.x);
            term_numerator *= &x0 - &x_i;
            term_denominator *= &x_j - &x_i;
        }

        if term_denominator.is_zero() {
            return Err(PolynomialError::DegenerateInterpolation { x: p_j.x });
        }

        numerator = numerator * &term_denominator + term_numerator * &denominator;
        denominator *= term_denominator;
    }

    if denominator.is_negative() {
        numerator = -numerator;
        denominator = -denominator;
    }

    Ok(LagrangeFraction {
        numerator,
        denominator,
    })
}

/// Evaluates the polynomial through `points` at `x0`.
///
/// Points lying on an integer-coefficient polynomial always give an exact division. For
/// inconsistent point sets the value is truncated toward zero; use [`evaluate_fraction`]
/// when exactness matters.
pub fn evaluate(points: &[Share], x0: i64) -> PolynomialResult<BigInt> {
    Ok(evaluate_fraction(points, x0)?.quotient())
}
