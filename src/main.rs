use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use wsl_exp::utils::logger;
use wsl_exp::{CliConfig, ExpError, ExplorerLauncher, Inspector};

fn main() -> ExitCode {
    if cfg!(windows) {
        eprintln!("This tool exp is usable only on WSL2.");
        return ExitCode::FAILURE;
    }

    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("exp failed: {:?}", e);
            eprintln!("{:#}", e);
            let code = e.downcast_ref::<ExpError>().map_or(1, ExpError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let options = config.to_options().context("Cannot prepare options")?;
    let inspector = Inspector::from_options(&options, ExplorerLauncher)?;

    if options.dry_run {
        let windows_path = inspector
            .preview(&options.path)
            .with_context(|| format!("Cannot translate {}", options.path.display()))?;
        println!("{}", windows_path);
        return Ok(());
    }

    let windows_path = inspector
        .open(&options.path)
        .with_context(|| format!("Cannot open {}", options.path.display()))?;
    tracing::info!("Opened {} in {}", windows_path, inspector.explorer().display());
    Ok(())
}
