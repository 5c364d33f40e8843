use crate::domain::model::{DEFAULT_SUBDIR, PLATFORMIO_DIR_NAME, SEARCH_PATH_VAR};
use crate::domain::ports::{Environment, Storage};
use crate::utils::error::{InstallError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Home-relative default location of the PlatformIO core directory.
pub fn default_toolchain_home(home: &Path) -> PathBuf {
    home.join(PLATFORMIO_DIR_NAME).join(DEFAULT_SUBDIR)
}

/// Rebuilds an `OsStr` from a slice of another `OsStr`'s encoded bytes.
fn os_slice(bytes: &[u8]) -> &OsStr {
    // SAFETY: callers only cut encoded bytes right before or after an ASCII
    // delimiter or the ASCII `.platformio` marker.
    unsafe { OsStr::from_encoded_bytes_unchecked(bytes) }
}

/// Splits a search-path value on an ASCII delimiter without decoding it.
pub fn split_search_paths(value: &OsStr, delimiter: u8) -> Vec<&OsStr> {
    value
        .as_encoded_bytes()
        .split(|b| *b == delimiter)
        .map(os_slice)
        .collect()
}

/// Cuts `entry` right after the first `.platformio` it contains.
pub fn platformio_root(entry: &OsStr) -> Option<PathBuf> {
    let bytes = entry.as_encoded_bytes();
    let marker = PLATFORMIO_DIR_NAME.as_bytes();
    bytes
        .windows(marker.len())
        .position(|w| w == marker)
        .map(|idx| PathBuf::from(os_slice(&bytes[..idx + marker.len()])))
}

/// Resolves the toolchain home: the default under the home directory first,
/// then the first `.platformio` entry of the search-path variable.
pub fn resolve_toolchain_home<E, S>(env: &E, storage: &S) -> Result<PathBuf>
where
    E: Environment + ?Sized,
    S: Storage + ?Sized,
{
    // A missing home only matters if the search path cannot help either.
    if let Some(home) = env.home_dir() {
        let default_dir = default_toolchain_home(&home);
        if storage.is_dir(&default_dir) {
            tracing::debug!("Using default PlatformIO directory {}", default_dir.display());
            return Ok(default_dir);
        }
        tracing::debug!(
            "Default PlatformIO directory {} not found, checking {}",
            default_dir.display(),
            SEARCH_PATH_VAR
        );
    } else {
        tracing::debug!("Home directory unknown, checking {}", SEARCH_PATH_VAR);
    }

    let raw = match env.var(SEARCH_PATH_VAR) {
        Some(raw) => raw,
        None if env.home_dir().is_none() => return Err(InstallError::HomeDirectoryUnavailable),
        None => {
            return Err(InstallError::MissingEnvironmentVariable {
                name: SEARCH_PATH_VAR.to_string(),
            })
        }
    };
    let candidate = split_search_paths(&raw, env.path_delimiter())
        .into_iter()
        .find_map(platformio_root)
        .ok_or_else(|| InstallError::PlatformioNotInSearchPath {
            name: SEARCH_PATH_VAR.to_string(),
        })?;

    if !storage.is_dir(&candidate) {
        return Err(InstallError::ToolchainDirectoryNotFound { path: candidate });
    }

    tracing::debug!(
        "Using PlatformIO directory {} from {}",
        candidate.display(),
        SEARCH_PATH_VAR
    );
    Ok(candidate)
}
