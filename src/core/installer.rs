use crate::core::resolver::resolve_toolchain_home;
use crate::domain::model::{BoardFile, CopyStep, InstallPlan, InstallReport, BOARDS_DIR_NAME};
use crate::domain::ports::{Environment, Storage};
use crate::utils::error::{InstallError, Result};
use std::path::PathBuf;

pub const INSTALLED_HEADER: &str = "Totem boards installed:";
pub const DRY_RUN_HEADER: &str = "Totem boards would be installed:";

pub struct Installer<E: Environment, S: Storage> {
    env: E,
    storage: S,
    source_dir: PathBuf,
}

impl<E: Environment, S: Storage> Installer<E, S> {
    pub fn new(env: E, storage: S, source_dir: PathBuf) -> Self {
        Self {
            env,
            storage,
            source_dir,
        }
    }

    pub fn sources(&self) -> Vec<BoardFile> {
        BoardFile::bundled(&self.source_dir)
    }

    /// Checks every precondition and computes where each board file goes.
    /// Touches nothing on disk.
    pub fn plan(&self) -> Result<InstallPlan> {
        let sources = self.sources();
        for board in &sources {
            if !self.storage.is_file(&board.path) {
                return Err(InstallError::MissingSourceFile {
                    name: board.name.clone(),
                    path: board.path.clone(),
                });
            }
            tracing::debug!("Found board definition {}", board.path.display());
        }

        let toolchain_home = resolve_toolchain_home(&self.env, &self.storage)?;
        let boards_dir = toolchain_home.join(BOARDS_DIR_NAME);

        let steps = sources
            .into_iter()
            .map(|source| CopyStep {
                destination: boards_dir.join(&source.name),
                source,
            })
            .collect();

        Ok(InstallPlan {
            toolchain_home,
            boards_dir,
            steps,
        })
    }

    pub fn run(&self) -> Result<InstallReport> {
        let plan = self.plan()?;
        self.apply(&plan)
    }

    /// Stops at the first failure; files already copied stay in place.
    pub fn apply(&self, plan: &InstallPlan) -> Result<InstallReport> {
        tracing::info!("📁 Installing boards into {}", plan.boards_dir.display());

        let created_boards_dir = self.storage.ensure_dir(&plan.boards_dir)?;
        if created_boards_dir {
            tracing::info!("Created {}", plan.boards_dir.display());
        }

        let mut installed = Vec::with_capacity(plan.steps.len());
        for step in &plan.steps {
            let bytes = self
                .storage
                .copy_file(&step.source.path, &step.destination)?;
            tracing::debug!(
                "Copied {} ({} bytes) to {}",
                step.source.name,
                bytes,
                step.destination.display()
            );
            installed.push(step.destination.clone());
        }

        tracing::info!("✅ Installed {} board definitions", installed.len());

        Ok(InstallReport {
            boards_dir: plan.boards_dir.clone(),
            installed,
            created_boards_dir,
        })
    }
}

/// Header line followed by one line per path.
pub fn render_report(header: &str, paths: &[PathBuf]) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(paths.iter().map(|p| p.display().to_string()));
    lines.join("\n")
}
