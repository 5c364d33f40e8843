use std::path::{Path, PathBuf};

/// PlatformIO core directory name searched for in the home directory and in search paths.
pub const PLATFORMIO_DIR_NAME: &str = ".platformio";

/// Extra segment appended to the home-relative default location.
pub const DEFAULT_SUBDIR: &str = "b";

pub const BOARDS_DIR_NAME: &str = "boards";

pub const SEARCH_PATH_VAR: &str = "PLATFORMIO_PATH";

pub const BOARD_FILE_NAMES: [&str; 2] = ["roboboard_x3.json", "roboboard_x4.json"];

/// A bundled board definition, copied as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFile {
    pub name: String,
    pub path: PathBuf,
}

impl BoardFile {
    pub fn new(source_dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: source_dir.join(name),
        }
    }

    /// All bundled board files located in `source_dir`, in install order.
    pub fn bundled(source_dir: &Path) -> Vec<BoardFile> {
        BOARD_FILE_NAMES
            .iter()
            .map(|name| BoardFile::new(source_dir, name))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStep {
    pub source: BoardFile,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub toolchain_home: PathBuf,
    pub boards_dir: PathBuf,
    pub steps: Vec<CopyStep>,
}

impl InstallPlan {
    pub fn destinations(&self) -> Vec<PathBuf> {
        self.steps.iter().map(|s| s.destination.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub boards_dir: PathBuf,
    pub installed: Vec<PathBuf>,
    pub created_boards_dir: bool,
}
