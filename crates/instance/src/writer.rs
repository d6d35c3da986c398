// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{InstanceError, InstanceResult};
use serde_json::{json, Map, Value};
use sharefit_consensus::ProblemInstance;
use sharefit_polynomial::encode;
use std::fs;
use std::path::Path;

/// Renders `instance` as a share file with every value written in `base`.
pub fn render_instance(instance: &ProblemInstance, base: u32) -> InstanceResult<Value> {
    let mut object = Map::new();
    object.insert(
        "keys".to_string(),
        json!({ "n": instance.n(), "k": instance.k() }),
    );
    for share in instance.shares() {
        let value = encode(&share.y, base)
            .map_err(|source| InstanceError::Encode { x: share.x, source })?;
        object.insert(
            share.x.to_string(),
            json!({ "base": base.to_string(), "value": value }),
        );
    }
    Ok(Value::Object(object))
}

/// Writes `instance` to `path` as pretty-printed JSON.
pub fn write_instance(path: &Path, instance: &ProblemInstance, base: u32) -> InstanceResult<()> {
    let rendered = serde_json::to_string_pretty(&render_instance(instance, base)?)?;
    fs::write(path, rendered + "\n").map_err(|source| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
