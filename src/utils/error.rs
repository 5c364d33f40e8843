use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Can't find {name} file in {}", path.display())]
    MissingSourceFile { name: String, path: PathBuf },

    #[error("Failed to locate .platformio directory for board installation: home directory and PLATFORMIO_PATH are both unavailable")]
    HomeDirectoryUnavailable,

    #[error("Failed to locate .platformio directory for board installation: {name} is not set")]
    MissingEnvironmentVariable { name: String },

    #[error("Failed to locate .platformio directory for board installation.")]
    PlatformioNotInSearchPath { name: String },

    #[error("Failed to locate .platformio directory for board installation in {}", path.display())]
    ToolchainDirectoryNotFound { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    FilesystemMutation {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Which precondition a failed run tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    MissingInput,
    UnresolvableToolchainDir,
    FilesystemMutation,
    Configuration,
}

impl InstallError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InstallError::MissingSourceFile { .. } => ErrorCategory::MissingInput,
            InstallError::HomeDirectoryUnavailable
            | InstallError::MissingEnvironmentVariable { .. }
            | InstallError::PlatformioNotInSearchPath { .. }
            | InstallError::ToolchainDirectoryNotFound { .. } => {
                ErrorCategory::UnresolvableToolchainDir
            }
            InstallError::FilesystemMutation { .. } => ErrorCategory::FilesystemMutation,
            InstallError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    /// The single diagnostic line shown to the user on failure.
    pub fn user_friendly_message(&self) -> String {
        format!("Error: {}", self)
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            InstallError::MissingSourceFile { .. } => {
                "Keep the board JSON files next to the installer, or pass --source-dir".to_string()
            }
            InstallError::HomeDirectoryUnavailable => {
                "Set HOME (or USERPROFILE on Windows) to your user directory".to_string()
            }
            InstallError::MissingEnvironmentVariable { name } => format!(
                "Install PlatformIO Core, or export {} with a path inside your .platformio directory",
                name
            ),
            InstallError::PlatformioNotInSearchPath { name } => {
                format!("Add a path containing .platformio to {}", name)
            }
            InstallError::ToolchainDirectoryNotFound { .. } => {
                "Check that the PlatformIO core directory exists".to_string()
            }
            InstallError::FilesystemMutation { .. } => {
                "Check permissions and free space of the PlatformIO directory".to_string()
            }
            InstallError::InvalidConfigValue { field, .. } => {
                format!("Fix the value passed for {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_installer_wording() {
        let err = InstallError::PlatformioNotInSearchPath {
            name: "PLATFORMIO_PATH".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Error: Failed to locate .platformio directory for board installation."
        );

        let err = InstallError::MissingSourceFile {
            name: "roboboard_x3.json".to_string(),
            path: PathBuf::from("/opt/totem/roboboard_x3.json"),
        };
        assert_eq!(
            err.to_string(),
            "Can't find roboboard_x3.json file in /opt/totem/roboboard_x3.json"
        );
    }

    #[test]
    fn test_unset_variable_uses_locate_wording() {
        let err = InstallError::MissingEnvironmentVariable {
            name: "PLATFORMIO_PATH".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Error: Failed to locate .platformio directory for board installation: PLATFORMIO_PATH is not set"
        );
        assert_eq!(err.category(), ErrorCategory::UnresolvableToolchainDir);
    }

    #[test]
    fn test_categories() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = InstallError::FilesystemMutation {
            action: "copy to",
            path: PathBuf::from("/tmp/boards/x.json"),
            source: io,
        };
        assert_eq!(err.category(), ErrorCategory::FilesystemMutation);
        assert!(err.to_string().contains("denied"));

        let err = InstallError::ToolchainDirectoryNotFound {
            path: PathBuf::from("/nope/.platformio"),
        };
        assert_eq!(err.category(), ErrorCategory::UnresolvableToolchainDir);
        assert!(err.to_string().ends_with("in /nope/.platformio"));
    }
}
