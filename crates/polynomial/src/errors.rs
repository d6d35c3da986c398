// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for numeral decoding and interpolation.

use thiserror::Error;

/// Errors that can occur while decoding numerals or evaluating interpolations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// A character is not a digit, or not a digit of the stated base
    #[error("Invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        /// Zero-based character index
        position: usize,
        base: u32,
    },

    /// Base outside of 2..=36
    #[error("Invalid base {base}: must be between 2 and 36")]
    InvalidBase { base: u32 },

    /// Empty digit string
    #[error("Empty numeral")]
    EmptyNumeral,

    /// Only non-negative values can be rendered as numerals
    #[error("Cannot encode negative value {value}")]
    NegativeNumeral { value: String },

    /// Two points share an x-coordinate so the shared denominator vanishes
    #[error("Degenerate interpolation: duplicate x-coordinate {x}")]
    DegenerateInterpolation { x: i64 },

    /// No points were supplied
    #[error("Cannot interpolate an empty point set")]
    EmptyInterpolation,
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
