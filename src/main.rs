use clap::Parser;
use totem_board_installer::utils::{logger, validation::Validate};
use totem_board_installer::{
    render_report, CliConfig, InstallError, Installer, LocalStorage, SystemEnvironment,
    DRY_RUN_HEADER, INSTALLED_HEADER,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting totem-board-installer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        // Logged below the default level: stderr carries only the one diagnostic line.
        tracing::debug!(
            "❌ Board installation failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), InstallError> {
    config.validate()?;

    let source_dir = config.resolved_source_dir();
    tracing::debug!("Reading board definitions from {}", source_dir.display());

    let installer = Installer::new(SystemEnvironment, LocalStorage::new(), source_dir);

    if config.dry_run {
        let plan = installer.plan()?;
        println!("{}", render_report(DRY_RUN_HEADER, &plan.destinations()));
        return Ok(());
    }

    let report = installer.run()?;
    println!("{}", render_report(INSTALLED_HEADER, &report.installed));
    Ok(())
}
