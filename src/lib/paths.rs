//! Path helpers shared by config parsing.

use std::path::{Path, PathBuf};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Expand a leading `~` or `~/` against `home`.
///
/// Returns `Ok(None)` when the path needs expansion but no home directory is
/// known. Paths without a leading `~` are returned unchanged.
pub fn expand_home(path: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Some(path.to_path_buf());
    };
    home.map(|home| home.join(rest))
}
