// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sharefit_polynomial::PolynomialError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a share file.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Share file must be a JSON object")]
    NotAnObject,

    #[error("Missing \"keys.k\" threshold")]
    MissingThreshold,

    #[error("Invalid \"keys.{field}\" value {value}: expected a positive integer")]
    InvalidKeys { field: &'static str, value: String },

    #[error("Invalid x-coordinate \"{key}\": expected a 64-bit integer")]
    InvalidX { key: String },

    #[error("Share {x}: invalid base {value}")]
    InvalidBase { x: i64, value: String },

    #[error("Share \"{key}\": {reason}")]
    InvalidShare { key: String, reason: String },

    #[error("Duplicate x-coordinate {x}")]
    DuplicateX { x: i64 },

    #[error("Share {x}: {source}")]
    Decode { x: i64, source: PolynomialError },

    #[error("Share {x} cannot be written: {source}")]
    Encode { x: i64, source: PolynomialError },
}

/// Result type alias for share file operations
pub type InstanceResult<T> = Result<T, InstanceError>;
