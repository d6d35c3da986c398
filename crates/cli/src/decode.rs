// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use num_bigint::BigInt;
use sharefit_config::AppConfig;
use sharefit_polynomial::decode_with;

pub fn decode_digits(config: &AppConfig, digits: &str, base: u32) -> Result<BigInt> {
    decode_with(digits, base, config.digit_policy())
        .with_context(|| format!("Could not decode '{}' in base {}", digits, base))
}

pub fn execute(config: &AppConfig, digits: &str, base: u32) -> Result<()> {
    println!("{}", decode_digits(config, digits, base)?);
    Ok(())
}
