// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path, DEFAULT_CONFIG_NAME};
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sharefit_consensus::{SearchStrategy, SolveOptions};
use sharefit_polynomial::DigitPolicy;
use std::{env, fmt, path::PathBuf, str::FromStr};
use tracing::debug;

/// Prefix for environment overrides, e.g. `SHAREFIT_STRATEGY=smallest`
pub const ENV_PREFIX: &str = "SHAREFIT_";

const ENV_KEYS: [&str; 4] = ["strategy", "digit_policy", "parallel", "output"];

/// How `solve` reports its results
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output '{other}', expected 'text' or 'json'")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Reconstruction strategy
    strategy: SearchStrategy,
    /// How strictly share values are decoded
    digit_policy: DigitPolicy,
    /// Score candidate subsets on all cores
    parallel: bool,
    /// Report format for `solve`
    output: OutputFormat,
    /// File the configuration was read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn digit_policy(&self) -> DigitPolicy {
        self.digit_policy
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            strategy: self.strategy,
            parallel: self.parallel,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Could not serialize configuration")
    }
}

/// Values given on the command line. `None` leaves the lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SearchStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit_policy: Option<DigitPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

/// Builds the effective configuration.
///
/// Layers, lowest first: built in defaults, the YAML file (`cli_config_file` or the nearest
/// `sharefit.config.yaml` above the working directory), `SHAREFIT_*` environment variables
/// and finally `overrides`.
pub fn load_config(cli_config_file: Option<String>, overrides: CliOverrides) -> Result<AppConfig> {
    let explicit = cli_config_file.is_some();
    let cwd = env::current_dir().context("Could not read the working directory")?;
    let config_file = resolve_config_path(
        find_in_parent,
        cwd,
        DEFAULT_CONFIG_NAME,
        cli_config_file.map(PathBuf::from),
    );

    let mut figment = Figment::from(Serialized::defaults(&AppConfig::default()));
    if let Some(path) = &config_file {
        if !path.is_file() {
            if explicit {
                bail!("Configuration file not found at {}", path.display());
            }
        } else {
            debug!(path = %path.display(), "Loading configuration file");
            figment = figment.merge(Yaml::file(path));
        }
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS))
        .merge(Serialized::defaults(&overrides))
        .extract()
        .context("Could not parse configuration")?;
    config.config_file = config_file;

    Ok(config)
}
