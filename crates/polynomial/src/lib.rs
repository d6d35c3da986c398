// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Exact arithmetic primitives for reconstructing the constant term of an unknown
//! polynomial from a set of `(x, y)` shares.
//!
//! ## Features
//!
//! - Uses `num-bigint` for every `y` value and every intermediate product.
//! - Numeral decoding: digit strings in bases 2 to 36 into arbitrary precision integers.
//! - Lagrange evaluation: the value of the interpolating polynomial at any integer point,
//!   computed with a single shared denominator so no rational type is ever needed.
//! - Coefficient form: a small `Polynomial` type used to produce shares for sampling and tests.
//!
//! ## Mathematical Background
//!
//! For points `(x_0, y_0), ..., (x_{k-1}, y_{k-1})` with distinct `x`, the unique polynomial of
//! degree `< k` through them takes the value
//!
//! ```text
//! P(x0) = Σ_j y_j · Π_{i≠j} (x0 - x_i) / Π_{i≠j} (x_j - x_i)
//! ```
//!
//! The sum is folded as one fraction `N / D`, so the only division performed is the final one.

pub mod errors;
pub mod lagrange;
pub mod polynomial;
pub mod radix;
pub mod share;

pub use errors::{PolynomialError, PolynomialResult};
pub use lagrange::{evaluate, evaluate_fraction, LagrangeFraction};
pub use polynomial::Polynomial;
pub use radix::{decode, decode_with, encode, DigitPolicy, MAX_BASE, MIN_BASE};
pub use share::Share;
