// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use sharefit_config::{AppConfig, OutputFormat};
use sharefit_consensus::solve;
use sharefit_instance::load_instance;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub strategy: String,
    /// Decimal rendering of P(0)
    pub constant_term: String,
    pub exact: bool,
    pub inliers: usize,
    pub shares: usize,
    pub threshold: usize,
    /// x-coordinates of the subset that produced the result
    pub subset: Vec<i64>,
}

impl FileReport {
    fn to_text(&self) -> String {
        format!(
            "{}: P(0) = {} ({} of {} shares agree)",
            self.file, self.constant_term, self.inliers, self.shares
        )
    }
}

pub fn solve_file(config: &AppConfig, file: &Path) -> Result<FileReport> {
    let instance = load_instance(file, config.digit_policy())
        .with_context(|| format!("Could not load {}", file.display()))?;
    let result = solve(&instance, config.solve_options())
        .with_context(|| format!("Could not solve {}", file.display()))?;

    if !result.exact {
        warn!(
            file = %file.display(),
            "Chosen subset does not divide evenly at x = 0, the constant term is truncated"
        );
    }
    info!(
        file = %file.display(),
        inliers = result.inliers,
        n = instance.n(),
        "Reconstructed"
    );

    Ok(FileReport {
        file: file.display().to_string(),
        strategy: config.strategy().to_string(),
        constant_term: result.constant_term.to_string(),
        exact: result.exact,
        inliers: result.inliers,
        shares: instance.n(),
        threshold: instance.k(),
        subset: result
            .subset
            .iter()
            .map(|&i| instance.shares()[i].x)
            .collect(),
    })
}

/// Solves every file independently. A failing file is logged and skipped; the command
/// fails once all files were attempted if any of them failed.
pub fn execute(config: &AppConfig, files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;
    for file in files {
        match solve_file(config, file) {
            Ok(report) => match config.output() {
                OutputFormat::Text => println!("{}", report.to_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
            },
            Err(err) => {
                error!("{:#}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, files.len());
    }
    Ok(())
}
