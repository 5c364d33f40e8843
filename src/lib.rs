pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, env::SystemEnvironment};

pub use crate::core::installer::{render_report, Installer, DRY_RUN_HEADER, INSTALLED_HEADER};
pub use crate::domain::model::{BoardFile, InstallPlan, InstallReport};
pub use crate::utils::error::{InstallError, Result};
