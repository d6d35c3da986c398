// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Numeral decoding and encoding in bases 2 to 36.
//!
//! Digits are `0-9` followed by `a-z` (case-insensitive), giving values 0 to 35.

use crate::errors::{PolynomialError, PolynomialResult};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest supported base
pub const MIN_BASE: u32 = 2;
/// Largest supported base
pub const MAX_BASE: u32 = 36;

/// How to treat alphanumeric digits whose value is not below the base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DigitPolicy {
    /// Reject digits `>= base`.
    #[default]
    Strict,
    /// Accept any `0-9a-zA-Z` digit and use its value as-is, e.g. `"9"` in base 8 counts as nine.
    Lenient,
}

fn check_base(base: u32) -> PolynomialResult<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(PolynomialError::InvalidBase { base })
    }
}

/// Decodes `digits` in `base`, rejecting digits that are not valid in that base.
pub fn decode(digits: &str, base: u32) -> PolynomialResult<BigInt> {
    decode_with(digits, base, DigitPolicy::Strict)
}

/// Decodes `digits` in `base` under the given [`DigitPolicy`].
///
/// The value is accumulated as `Σ digit_i · base^(len-1-i)` with a big integer running
/// power, so the length of `digits` is unbounded.
///
/// # Errors
///
/// * `InvalidBase` if `base` is outside `2..=36`.
/// * `EmptyNumeral` if `digits` is empty.
/// * `InvalidDigit` for the leftmost offending character.
pub fn decode_with(digits: &str, base: u32, policy: DigitPolicy) -> PolynomialResult<BigInt> {
    check_base(base)?;
    if digits.is_empty() {
        return Err(PolynomialError::EmptyNumeral);
    }

    let values = digits
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            let invalid = PolynomialError::InvalidDigit {
                digit,
                position,
                base,
            };
            let value = digit.to_digit(MAX_BASE).ok_or_else(|| invalid.clone())?;
            if policy == DigitPolicy::Strict && value >= base {
                return Err(invalid);
            }
            Ok(value)
        })
        .collect::<PolynomialResult<Vec<u32>>>()?;

    let big_base = BigInt::from(base);
    let mut result = BigInt::zero();
    let mut power = BigInt::one();
    for value in values.iter().rev() {
        result += &power * *value;
        power *= &big_base;
    }

    Ok(result)
}

/// Renders a non-negative value as a lowercase numeral in `base`.
pub fn encode(value: &BigInt, base: u32) -> PolynomialResult<String> {
    check_base(base)?;
    if value.sign() == Sign::Minus {
        return Err(PolynomialError::NegativeNumeral {
            value: value.to_string(),
        });
    }
    Ok(value.to_str_radix(base))
}
