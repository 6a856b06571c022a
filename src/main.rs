//! PyInstaller Action - Main entry point
//!
//! Invoked once per step by `action.yml`.

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use pyinstaller_action::cli::{Cli, Commands};
use pyinstaller_action::commands;
use pyinstaller_action::{ActionInputs, Workflow};

/// Initialize the logger with appropriate settings
///
/// Logs go to stderr so stdout stays free for workflow commands.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    if let Err(e) = dispatch(&cli) {
        error!("{:#}", e);
        std::process::exit(commands::exit_code_for(&e));
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    let workflow = Workflow::from_env();
    let inputs = ActionInputs::load(cli.inputs.as_deref())?;

    match cli.command {
        Commands::Validate => {
            commands::validate_inputs(&workflow, &inputs)?;
        }
        Commands::Normalize => {
            let valid = commands::validate_inputs(&workflow, &inputs)?;
            commands::write_normalized(&workflow, &valid)?;
        }
        Commands::Build => {
            let valid = commands::validate_inputs(&workflow, &inputs)?;
            commands::build(&workflow, &valid, cli.dry_run)?;
        }
        Commands::ReportUpload { outcome } => {
            commands::report_upload(&workflow, &inputs, outcome)?;
        }
        Commands::Run => {
            commands::run(&workflow, &inputs, cli.dry_run)?;
        }
    }
    Ok(())
}
