//! Command dispatch: routes parsed arguments to the parameter service

use std::io::{self, Write};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::ParameterService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{CreateOutcome, ParameterType};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
///
/// Store commands get a fresh client scoped to their `--profile` before
/// anything is sent.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Config { command } => execute_config(cli, command),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Get { profile, .. }
        | Commands::Search { profile, .. }
        | Commands::Create { profile, .. } => {
            let settings = Settings::load()?.with_region(cli.region.clone());
            debug!("settings: {:?}", settings);
            let container = ServiceContainer::new(settings, profile)?;
            execute_store_command(&container, &cli.command, &mut io::stdout().lock())
        }
    }
}

/// Run a store command against an already wired container, writing results to `out`.
pub fn execute_store_command(
    container: &ServiceContainer,
    command: &Commands,
    out: &mut impl Write,
) -> CliResult<()> {
    let service = container.parameter_service();
    match command {
        Commands::Get { name, .. } => get(&service, name, out),
        Commands::Search { query, .. } => search(&service, query, out),
        Commands::Create {
            name, value, kind, ..
        } => create(&service, name, value, *kind, out),
        Commands::Config { .. } | Commands::Completion { .. } => Err(CliError::Usage(
            "not a parameter store command".to_string(),
        )),
    }
}

#[instrument(skip(service, out))]
fn get(service: &ParameterService, name: &str, out: &mut impl Write) -> CliResult<()> {
    let parameter = service.get_parameter(name)?;
    output::parameter(out, &parameter.name, &parameter.value).map_err(write_failed)?;
    Ok(())
}

#[instrument(skip(service, out))]
fn search(service: &ParameterService, query: &str, out: &mut impl Write) -> CliResult<()> {
    let names = service.search_parameters(query)?;
    for parameter in service.get_parameters(&names)? {
        output::parameter(out, &parameter.name, &parameter.value).map_err(write_failed)?;
    }
    Ok(())
}

#[instrument(skip(service, value, out))]
fn create(
    service: &ParameterService,
    name: &str,
    value: &str,
    kind: ParameterType,
    out: &mut impl Write,
) -> CliResult<()> {
    let written = match service.create_parameter(name, value, kind)? {
        CreateOutcome::Created => output::info(out, &format!("{name} has been created")),
        CreateOutcome::Updated => output::info(out, &format!("{name} has been updated")),
        CreateOutcome::NotOverwritten => output::info(out, "Value was not overwritten"),
        CreateOutcome::Failed { message } => {
            output::error(&message);
            output::info(out, "Unable to create parameter")
        }
    };
    written.map_err(write_failed)?;
    Ok(())
}

fn execute_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    let mut out = io::stdout().lock();
    let written = match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?.with_region(cli.region.clone());
            output::info(&mut out, &settings.to_toml()?)
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&mut out, &path.display()),
            None => output::info(&mut out, "no config directory available on this platform"),
        },
    };
    written.map_err(write_failed)?;
    Ok(())
}

fn write_failed(e: io::Error) -> CliError {
    InfraError::io("write output", e).into()
}
