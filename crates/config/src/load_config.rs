// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

/// File name searched for when no `--config` is given
pub const DEFAULT_CONFIG_NAME: &str = "sharefit.config.yaml";

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Walks from `path` up to the filesystem root looking for `filename`.
pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// Picks the configuration file to load, if any.
///
/// An explicit `cli_file` always wins (relative paths resolve against `cwd`). Otherwise the
/// nearest `default_filename` in `cwd` or one of its parents is used. Without either, the
/// built in defaults apply and `None` is returned.
pub fn resolve_config_path<P: Into<PathBuf>>(
    find_in_parent: FindInParent,
    cwd: P,
    default_filename: &str,
    cli_file: Option<P>,
) -> Option<PathBuf> {
    let cwd = cwd.into();

    if let Some(cli_file) = cli_file.map(Into::into) {
        if cli_file.is_absolute() {
            return Some(cli_file);
        }
        return Some(clean(cwd.join(cli_file)));
    }

    find_in_parent(&cwd, default_filename)
}
