use crate::utils::error::{InstallError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_existing_dir(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if !path.is_dir() {
        return Err(InstallError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Directory does not exist".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source_dir", Path::new("/opt/totem")).is_ok());
        assert!(validate_path("source_dir", Path::new("")).is_err());
        assert!(validate_path("source_dir", &PathBuf::from("bad\0path")).is_err());
    }

    #[test]
    fn test_validate_existing_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert!(validate_existing_dir("source_dir", temp_dir.path()).is_ok());

        let missing = temp_dir.path().join("missing");
        let err = validate_existing_dir("source_dir", &missing).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }
}
