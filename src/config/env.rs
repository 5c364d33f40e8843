use crate::core::Environment;
use crate::domain::model::BOARD_FILE_NAMES;
use crate::utils::error::{InstallError, Result};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Board definitions shipped with this crate, located at build time.
pub const BUNDLED_BOARDS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/boards");

/// Reads the real process environment.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        let candidates: &[&str] = if cfg!(windows) {
            &["USERPROFILE", "HOME"]
        } else {
            &["HOME"]
        };

        candidates
            .iter()
            .filter_map(|key| env::var_os(key))
            .find(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn var(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }
}

/// Directory containing the running installer, with symlinks resolved.
pub fn installer_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .and_then(|path| path.canonicalize())
        .map_err(|e| InstallError::InvalidConfigValue {
            field: "source_dir".to_string(),
            value: String::new(),
            reason: format!("Unable to locate the installer executable: {}", e),
        })?;

    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| InstallError::InvalidConfigValue {
            field: "source_dir".to_string(),
            value: exe.display().to_string(),
            reason: "Installer executable has no parent directory".to_string(),
        })
}

fn holds_board_files(dir: &Path) -> bool {
    BOARD_FILE_NAMES.iter().all(|name| dir.join(name).is_file())
}

/// Where board files are read from when no directory is given: next to the
/// installer when both files sit there, otherwise the build-time bundle.
pub fn default_source_dir() -> PathBuf {
    match installer_dir() {
        Ok(dir) if holds_board_files(&dir) => dir,
        Ok(dir) => {
            tracing::debug!(
                "No board files next to {}, using {}",
                dir.display(),
                BUNDLED_BOARDS_DIR
            );
            PathBuf::from(BUNDLED_BOARDS_DIR)
        }
        Err(e) => {
            tracing::debug!("{}, using {}", e, BUNDLED_BOARDS_DIR);
            PathBuf::from(BUNDLED_BOARDS_DIR)
        }
    }
}
