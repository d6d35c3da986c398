// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{InstanceError, InstanceResult};
use serde::Deserialize;
use serde_json::Value;
use sharefit_consensus::ProblemInstance;
use sharefit_polynomial::{decode_with, DigitPolicy, Share};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const KEYS: &str = "keys";

/// Share files write numbers either as JSON numbers or as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberField {
    Number(u64),
    Text(String),
}

impl NumberField {
    fn parse<T: std::str::FromStr>(&self) -> Option<T> {
        match self {
            NumberField::Number(n) => n.to_string().parse().ok(),
            NumberField::Text(s) => s.trim().parse().ok(),
        }
    }

    fn raw(&self) -> String {
        match self {
            NumberField::Number(n) => n.to_string(),
            NumberField::Text(s) => format!("\"{s}\""),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Keys {
    k: Option<NumberField>,
    n: Option<NumberField>,
}

#[derive(Debug, Deserialize)]
struct ShareEntry {
    base: NumberField,
    value: String,
}

fn positive(field: &'static str, value: &NumberField) -> InstanceResult<usize> {
    match value.parse::<usize>() {
        Some(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(InstanceError::InvalidKeys {
            field,
            value: value.raw(),
        }),
    }
}

/// Parses a share file into a [`ProblemInstance`], decoding every value under `policy`.
///
/// Shares are returned sorted by ascending `x`. A `keys.n` that disagrees with the number
/// of shares is reported with `warn!` and otherwise ignored; `n < k` is left for the
/// search to reject.
pub fn parse_instance(json: &str, policy: DigitPolicy) -> InstanceResult<ProblemInstance> {
    let root: Value = serde_json::from_str(json)?;
    let object = root.as_object().ok_or(InstanceError::NotAnObject)?;

    let keys: Keys = match object.get(KEYS) {
        Some(keys) => serde_json::from_value(keys.clone())?,
        None => return Err(InstanceError::MissingThreshold),
    };
    let k = positive("k", keys.k.as_ref().ok_or(InstanceError::MissingThreshold)?)?;
    let declared_n = keys.n.as_ref().map(|n| positive("n", n)).transpose()?;

    let mut seen = HashSet::new();
    let mut shares = Vec::with_capacity(object.len().saturating_sub(1));
    for (key, entry) in object.iter().filter(|(key, _)| key.as_str() != KEYS) {
        let x: i64 = key
            .trim()
            .parse()
            .map_err(|_| InstanceError::InvalidX { key: key.clone() })?;
        if !seen.insert(x) {
            return Err(InstanceError::DuplicateX { x });
        }

        let entry: ShareEntry =
            serde_json::from_value(entry.clone()).map_err(|e| InstanceError::InvalidShare {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        let base: u32 = entry.base.parse().ok_or_else(|| InstanceError::InvalidBase {
            x,
            value: entry.base.raw(),
        })?;
        let y = decode_with(entry.value.trim(), base, policy)
            .map_err(|source| InstanceError::Decode { x, source })?;

        shares.push(Share::new(x, y));
    }
    shares.sort_by_key(|share| share.x);

    if let Some(n) = declared_n {
        if n != shares.len() {
            warn!(declared = n, found = shares.len(), "Share count differs from keys.n");
        }
    }
    debug!(k, n = shares.len(), "Parsed share file");

    Ok(ProblemInstance::new(k, shares))
}

/// Reads and parses the share file at `path`.
pub fn load_instance(path: &Path, policy: DigitPolicy) -> InstanceResult<ProblemInstance> {
    let json = fs::read_to_string(path).map_err(|source| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_instance(&json, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use sharefit_polynomial::PolynomialError;

    #[test]
    fn test_parse_mixed_bases() {
        let json = r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": 10, "value": "12" },
            "6": { "base": "4", "value": "213" }
        }"#;
        let instance = parse_instance(json, DigitPolicy::Strict).unwrap();
        assert_eq!(instance.k(), 3);
        assert_eq!(
            instance.shares(),
            &[
                Share::new(1, 4),
                Share::new(2, 7),
                Share::new(3, 12),
                Share::new(6, 39)
            ]
        );
    }

    #[test]
    fn test_shares_sorted_numerically() {
        let json = r#"{
            "keys": { "k": "2" },
            "10": { "base": "10", "value": "1" },
            "-3": { "base": "10", "value": "2" },
            "2": { "base": "10", "value": "3" }
        }"#;
        let instance = parse_instance(json, DigitPolicy::Strict).unwrap();
        let xs: Vec<i64> = instance.shares().iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![-3, 2, 10]);
        assert_eq!(instance.k(), 2);
    }

    #[test]
    fn test_large_value() {
        let json = r#"{
            "keys": { "k": 1 },
            "1": { "base": "16", "value": "ffffffffffffffffffffffffffffffffffffffff" }
        }"#;
        let instance = parse_instance(json, DigitPolicy::Strict).unwrap();
        assert_eq!(
            instance.shares()[0].y,
            BigInt::from(2).pow(160) - BigInt::from(1)
        );
    }

    #[test]
    fn test_digit_policy_applied() {
        let json = r#"{ "keys": { "k": 1 }, "1": { "base": "8", "value": "19" } }"#;
        assert!(matches!(
            parse_instance(json, DigitPolicy::Strict),
            Err(InstanceError::Decode {
                x: 1,
                source: PolynomialError::InvalidDigit { digit: '9', .. }
            })
        ));
        let instance = parse_instance(json, DigitPolicy::Lenient).unwrap();
        assert_eq!(instance.shares()[0].y, BigInt::from(17));
    }

    #[test]
    fn test_duplicate_x_rejected() {
        let json = r#"{
            "keys": { "k": 1 },
            "1": { "base": "10", "value": "4" },
            "01": { "base": "10", "value": "5" }
        }"#;
        assert!(matches!(
            parse_instance(json, DigitPolicy::Strict),
            Err(InstanceError::DuplicateX { x: 1 })
        ));
    }

    #[test]
    fn test_malformed_inputs() {
        let cases = [
            ("[]", "not an object"),
            (r#"{ "1": { "base": "10", "value": "4" } }"#, "missing keys"),
            (r#"{ "keys": { "n": 1 } }"#, "missing k"),
            (r#"{ "keys": { "k": 0 } }"#, "zero k"),
            (r#"{ "keys": { "k": "three" } }"#, "text k"),
            (r#"{ "keys": { "k": 1 }, "one": { "base": "10", "value": "4" } }"#, "bad x"),
            (r#"{ "keys": { "k": 1 }, "1": { "base": "ten", "value": "4" } }"#, "bad base"),
            (r#"{ "keys": { "k": 1 }, "1": { "base": "99", "value": "4" } }"#, "base range"),
            (r#"{ "keys": { "k": 1 }, "1": { "value": "4" } }"#, "missing base"),
            (r#"{ "keys": { "k": 1 }, "1": "4" }"#, "share not object"),
            ("{", "truncated"),
        ];
        for (json, label) in cases {
            assert!(
                parse_instance(json, DigitPolicy::Strict).is_err(),
                "expected failure: {label}"
            );
        }

        assert!(matches!(
            parse_instance(r#"{ "keys": { "k": 1 }, "1": { "base": "ten", "value": "4" } }"#, DigitPolicy::Strict),
            Err(InstanceError::InvalidBase { x: 1, .. })
        ));
        assert!(matches!(
            parse_instance(r#"{ "keys": { "k": 1 }, "1": { "base": "99", "value": "4" } }"#, DigitPolicy::Strict),
            Err(InstanceError::Decode {
                source: PolynomialError::InvalidBase { base: 99 },
                ..
            })
        ));
    }

    #[test]
    fn test_fewer_shares_than_threshold_still_loads() {
        let json = r#"{ "keys": { "n": 1, "k": 3 }, "1": { "base": "10", "value": "4" } }"#;
        let instance = parse_instance(json, DigitPolicy::Strict).unwrap();
        assert_eq!(instance.k(), 3);
        assert_eq!(instance.n(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = load_instance(Path::new("/nonexistent/shares.json"), DigitPolicy::Strict);
        assert!(matches!(result, Err(InstanceError::Io { .. })));
    }
}
