// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{decode, print_config, sample, solve};
use anyhow::Result;
use clap::{command, ArgAction, Parser, Subcommand};
use num_bigint::BigInt;
use sharefit_config::{load_config, AppConfig, CliOverrides, OutputFormat};
use sharefit_consensus::SearchStrategy;
use sharefit_polynomial::DigitPolicy;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "sharefit")]
#[command(about = "Recover the constant term of a secret polynomial from shares, some of which may be corrupted", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `sharefit -vvv` will give
    /// you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        let config = self.load_config()?;
        info!("Config loaded from: {:?}", config.config_file());

        match self.command {
            Commands::Solve { files, .. } => solve::execute(&config, &files)?,
            Commands::Decode { digits, base, .. } => decode::execute(&config, &digits, base)?,
            Commands::Sample {
                coefficients,
                xs,
                base,
                corrupt,
                out,
            } => sample::execute(coefficients, &xs, &corrupt, base, out.as_deref())?,
            Commands::Config => print_config::execute(&config)?,
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        load_config(self.config.clone(), self.command.overrides())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct P(0) from one or more share files
    Solve {
        /// Share files to process
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Reconstruction strategy: `consensus` or `smallest`
        #[arg(long)]
        strategy: Option<SearchStrategy>,

        /// Score candidate subsets on all cores
        #[arg(long)]
        parallel: bool,

        /// Accept digits at or above the base
        #[arg(long)]
        lenient_digits: bool,

        /// Print one JSON object per file
        #[arg(long)]
        json: bool,
    },

    /// Decode a numeral written in the given base
    Decode {
        /// Digits to decode
        digits: String,

        /// Radix between 2 and 36
        #[arg(short, long)]
        base: u32,

        /// Accept digits at or above the base
        #[arg(long)]
        lenient_digits: bool,
    },

    /// Write a share file sampled from a known polynomial
    Sample {
        /// Coefficients in ascending order, constant term first
        #[arg(
            long,
            value_delimiter = ',',
            required = true,
            allow_hyphen_values = true
        )]
        coefficients: Vec<BigInt>,

        /// x-coordinates to sample at
        #[arg(
            long,
            value_delimiter = ',',
            required = true,
            allow_hyphen_values = true
        )]
        xs: Vec<i64>,

        /// Base the share values are written in
        #[arg(long, default_value_t = 10)]
        base: u32,

        /// x-coordinates whose y-value is bumped by one
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        corrupt: Vec<i64>,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

impl Commands {
    /// Flags that take precedence over the config file and environment.
    fn overrides(&self) -> CliOverrides {
        match self {
            Commands::Solve {
                strategy,
                parallel,
                lenient_digits,
                json,
                ..
            } => CliOverrides {
                strategy: *strategy,
                digit_policy: lenient_digits.then_some(DigitPolicy::Lenient),
                parallel: parallel.then_some(true),
                output: json.then_some(OutputFormat::Json),
            },
            Commands::Decode { lenient_digits, .. } => CliOverrides {
                digit_policy: lenient_digits.then_some(DigitPolicy::Lenient),
                ..CliOverrides::default()
            },
            _ => CliOverrides::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["sharefit", "config"]).unwrap();
        assert_eq!(cli.log_level(), Level::WARN);
        let cli = Cli::try_parse_from(["sharefit", "-vv", "config"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
        let cli = Cli::try_parse_from(["sharefit", "config", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), Level::TRACE);
        let cli = Cli::try_parse_from(["sharefit", "-q", "config"]).unwrap();
        assert_eq!(cli.log_level(), Level::ERROR);
        assert!(Cli::try_parse_from(["sharefit", "-q", "-v", "config"]).is_err());
    }

    #[test]
    fn test_solve_overrides() {
        let cli = Cli::try_parse_from([
            "sharefit",
            "solve",
            "a.json",
            "b.json",
            "--strategy",
            "smallest",
            "--json",
        ])
        .unwrap();
        let overrides = cli.command.overrides();
        assert_eq!(overrides.strategy, Some(SearchStrategy::Smallest));
        assert_eq!(overrides.output, Some(OutputFormat::Json));
        assert_eq!(overrides.parallel, None);
        assert_eq!(overrides.digit_policy, None);

        assert!(Cli::try_parse_from(["sharefit", "solve"]).is_err());
        assert!(Cli::try_parse_from(["sharefit", "solve", "a.json", "--strategy", "ransac"]).is_err());
    }

    #[test]
    fn test_sample_arguments() {
        let cli = Cli::try_parse_from([
            "sharefit",
            "sample",
            "--coefficients",
            "-5,0,123456789012345678901234567890",
            "--xs",
            "-2,1,3",
            "--corrupt",
            "3",
        ])
        .unwrap();
        let Commands::Sample {
            coefficients,
            xs,
            base,
            corrupt,
            out,
        } = cli.command
        else {
            panic!("expected sample");
        };
        assert_eq!(coefficients[0], BigInt::from(-5));
        assert_eq!(xs, vec![-2, 1, 3]);
        assert_eq!(base, 10);
        assert_eq!(corrupt, vec![3]);
        assert_eq!(out, None);
    }

    #[test]
    fn test_sample_lists_starting_negative() {
        let cli = Cli::try_parse_from([
            "sharefit",
            "sample",
            "--coefficients",
            "-7,-1",
            "--xs",
            "-3,-2,4",
            "--corrupt",
            "-2,4",
            "--base",
            "16",
        ])
        .unwrap();
        let Commands::Sample {
            coefficients,
            xs,
            base,
            corrupt,
            ..
        } = cli.command
        else {
            panic!("expected sample");
        };
        assert_eq!(coefficients, vec![BigInt::from(-7), BigInt::from(-1)]);
        assert_eq!(xs, vec![-3, -2, 4]);
        assert_eq!(corrupt, vec![-2, 4]);
        assert_eq!(base, 16);
    }
}
