// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use num_bigint::BigInt;
use sharefit_consensus::ProblemInstance;
use sharefit_instance::{render_instance, write_instance};
use sharefit_polynomial::Polynomial;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Samples the polynomial with ascending `coefficients` at `xs`, adding one to the y-value
/// of every x listed in `corrupt`. The threshold is the number of coefficients.
pub fn build_instance(
    coefficients: Vec<BigInt>,
    xs: &[i64],
    corrupt: &[i64],
) -> Result<ProblemInstance> {
    if coefficients.is_empty() {
        bail!("At least one coefficient is required");
    }
    let mut seen = HashSet::new();
    if let Some(x) = xs.iter().find(|x| !seen.insert(**x)) {
        bail!("x = {} is listed more than once", x);
    }
    if let Some(x) = corrupt.iter().find(|x| !seen.contains(*x)) {
        bail!("Cannot corrupt x = {}, it is not sampled", x);
    }

    let polynomial = Polynomial::from_ascending_coefficients(coefficients);
    let threshold = polynomial.threshold();
    debug!(%polynomial, threshold, "Sampling shares");
    let mut shares = polynomial.shares(xs);
    for share in shares.iter_mut().filter(|s| corrupt.contains(&s.x)) {
        share.y += 1;
    }

    Ok(ProblemInstance::new(threshold, shares))
}

pub fn execute(
    coefficients: Vec<BigInt>,
    xs: &[i64],
    corrupt: &[i64],
    base: u32,
    out: Option<&Path>,
) -> Result<()> {
    let instance = build_instance(coefficients, xs, corrupt)?;
    match out {
        Some(path) => {
            write_instance(path, &instance, base)
                .with_context(|| format!("Could not write {}", path.display()))?;
            info!(
                path = %path.display(),
                n = instance.n(),
                k = instance.k(),
                "Wrote share file"
            );
        }
        None => {
            let rendered = render_instance(&instance, base).context("Could not render shares")?;
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharefit_consensus::{solve, SolveOptions};
    use sharefit_instance::load_instance;
    use sharefit_polynomial::{DigitPolicy, Share};

    fn coefficients(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_build_instance() -> Result<()> {
        // x^2 + x + 2
        let instance = build_instance(coefficients(&[2, 1, 1]), &[1, 2, 3, 4], &[4])?;
        assert_eq!(instance.k(), 3);
        assert_eq!(
            instance.shares(),
            &[
                Share::new(1, 4),
                Share::new(2, 8),
                Share::new(3, 14),
                Share::new(4, 23)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_build_instance_rejects() {
        assert!(build_instance(vec![], &[1], &[]).is_err());
        assert!(build_instance(coefficients(&[1]), &[1, 1], &[]).is_err());
        assert!(build_instance(coefficients(&[1]), &[1, 2], &[3]).is_err());
    }

    #[test]
    fn test_sampled_file_solves() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.json");
        execute(
            coefficients(&[42, 7, 3]),
            &[1, 2, 3, 4, 5, 6, 7],
            &[2, 5],
            36,
            Some(&path),
        )?;

        let instance = load_instance(&path, DigitPolicy::Strict)?;
        let result = solve(&instance, SolveOptions::default())?;
        assert_eq!(result.constant_term, BigInt::from(42));
        assert_eq!(result.inliers, 5);
        Ok(())
    }
}
