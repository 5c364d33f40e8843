use crate::utils::error::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Process-level lookups the resolver depends on.
pub trait Environment {
    fn home_dir(&self) -> Option<PathBuf>;
    fn var(&self, key: &str) -> Option<OsString>;

    /// Separator used by search-path variables on this host.
    fn path_delimiter(&self) -> u8 {
        if cfg!(windows) {
            b';'
        } else {
            b':'
        }
    }
}

pub trait Storage {
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;

    /// Creates `path` without creating missing parents. Returns `true` when the
    /// directory did not exist before.
    fn ensure_dir(&self, path: &Path) -> Result<bool>;

    /// Copies `from` over `to`, replacing any existing file.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64>;
}
