use crate::core::Storage;
use crate::utils::error::{InstallError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn ensure_dir(&self, path: &Path) -> Result<bool> {
        // `create_dir`, not `create_dir_all`: the parent must already exist.
        match fs::create_dir(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
            Err(source) => Err(InstallError::FilesystemMutation {
                action: "create directory",
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64> {
        fs::copy(from, to).map_err(|source| InstallError::FilesystemMutation {
            action: "copy to",
            path: to.to_path_buf(),
            source,
        })
    }
}
