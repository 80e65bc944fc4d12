//! Path expansion for configuration values.
//!
//! Paths in the configuration file may start with `~` and may be relative.
//! Relative paths are taken relative to the configuration file, not the
//! working directory, so a config keeps working when invoked from elsewhere.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Surrounding whitespace is ignored. Relative paths stay relative.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Expands `path` and resolves it against `base_dir` if it is still relative.
///
/// Home-relative paths are never joined onto `base_dir`.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let expanded = expand(path);

    if expanded.as_os_str().is_empty() || expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}
