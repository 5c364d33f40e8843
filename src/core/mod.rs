pub mod installer;
pub mod resolver;

pub use crate::domain::model::{BoardFile, InstallPlan, InstallReport};
pub use crate::domain::ports::{Environment, Storage};
pub use crate::utils::error::Result;
