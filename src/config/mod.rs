pub mod cli;
pub mod env;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_existing_dir, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "totem-board-installer")]
#[command(about = "Install Totem RoboBoard X3/X4 board definitions into PlatformIO")]
pub struct CliConfig {
    /// Directory holding roboboard_x3.json and roboboard_x4.json
    /// (defaults to the installer's own directory, then the bundled boards/)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Resolve and report destinations without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolved_source_dir(&self) -> PathBuf {
        match &self.source_dir {
            Some(dir) => dir.clone(),
            None => env::default_source_dir(),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.source_dir {
            validate_existing_dir("source_dir", dir)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["totem-board-installer"]);
        assert!(config.source_dir.is_none());
        assert_eq!(
            config.resolved_source_dir(),
            PathBuf::from(env::BUNDLED_BOARDS_DIR)
        );
        assert!(!config.dry_run);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let config =
            CliConfig::parse_from(["totem-board-installer", "--source-dir", dir, "--dry-run", "-v"]);
        assert_eq!(config.resolved_source_dir(), temp_dir.path());
        assert!(config.dry_run);
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_source_dir_fails_validation() {
        let config = CliConfig::parse_from([
            "totem-board-installer",
            "--source-dir",
            "/definitely/not/here",
        ]);
        assert!(config.validate().is_err());
    }
}
