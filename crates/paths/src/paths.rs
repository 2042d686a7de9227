//! Centralized path management for hostbook.
//!
//! The home directory and the default SSH client config location are lazily
//! initialized and cached. Use `set_*` functions before first access to
//! override for testing.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static HOME_DIR: OnceLock<PathBuf> = OnceLock::new();
static SSH_CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// The user's home directory (or `.` if it cannot be determined).
pub fn home_dir() -> &'static PathBuf {
    HOME_DIR.get_or_init(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
}

/// ~/.ssh/config (or the platform equivalent under the resolved home).
pub fn ssh_config_file() -> &'static PathBuf {
    SSH_CONFIG_FILE.get_or_init(|| home_dir().join(".ssh").join("config"))
}

/// Override the home directory (must be called before first access). For testing.
pub fn set_home_dir(path: PathBuf) {
    let _ = HOME_DIR.set(path);
}

/// Override the SSH config file path (must be called before first access). For testing.
pub fn set_ssh_config_file(path: PathBuf) {
    let _ = SSH_CONFIG_FILE.set(path);
}

/// Expand a leading `~` or `~/...` against the given home directory.
///
/// The `~user` form is not supported and is returned unchanged, matching
/// OpenSSH client behavior for paths we cannot resolve.
pub fn expand_tilde(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Absolute form of `path`: relative paths are resolved against the current
/// working directory. Does not touch the filesystem or resolve symlinks.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
