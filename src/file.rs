//! File reading and platform config-directory discovery.

use std::path::{Path, PathBuf};

use crate::error::ConfbindError;

pub(crate) fn read(path: &Path) -> Result<String, ConfbindError> {
    std::fs::read_to_string(path).map_err(|source| ConfbindError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate `file_name` inside the platform config directory for `app_name`
/// (e.g. `~/.config/{app_name}/{file_name}` on Linux).
///
/// Returns `None` when no config directory can be determined for the current
/// user. The file itself is not required to exist; pair with
/// [`merge_file_if_exists`](crate::Builder::merge_file_if_exists).
pub fn platform_config_file(app_name: &str, file_name: &str) -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", app_name)?;
    Some(dirs.config_dir().join(file_name))
}
