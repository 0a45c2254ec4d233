//! lpconf - LuckPerms configuration helper
//!
//! Parses duration strings and resolves configuration key paths from
//! `LUCKPERMS_*` environment variables.

use clap::Parser;
use luckperms_config::{
    cli::{Cli, Command},
    config::{
        env_var_name, is_sensitive_path, EnvManager, EnvSource, EnvironmentVariableConfigAdapter,
        HostInfo, MapEnv,
    },
    defaults::{DEFAULT_HOST_NAME, DEFAULT_LOGGER_NAME, REDACTED_VALUE},
    duration::parse_duration,
    error::{AppError, Result},
    logging::Logger,
    PKG_NAME, VERSION,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[derive(Serialize)]
struct DurationReport<'a> {
    input: &'a str,
    seconds: u64,
}

fn main() {
    let cli = Cli::parse();
    let logger = Logger::with_settings(DEFAULT_LOGGER_NAME, cli.log_settings());

    if let Err(e) = run_application(&cli, &logger) {
        // stderr gets the friendly message only; the structured entry is for --debug
        logger.debug(&e.to_string()).error_info(&e).log();
        eprintln!("{}", e.user_friendly_message());
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: &Cli, logger: &Logger) -> Result<()> {
    if cli.debug {
        logger.debug(&format!("{} v{}", PKG_NAME, VERSION)).log();
    }

    match &cli.command {
        Command::Duration { inputs, json } => run_duration(inputs, *json),
        Command::EnvName { paths } => {
            for path in paths {
                println!("{}", env_var_name(path));
            }
            Ok(())
        }
        Command::Resolve { paths, env_file, isolated, reveal } => {
            run_resolve(paths, env_file.as_deref(), *isolated, *reveal, logger)
        }
        Command::ExampleEnv { output } => run_example_env(output.as_ref()),
    }
}

fn run_duration(inputs: &[String], json: bool) -> Result<()> {
    for input in inputs {
        let duration = parse_duration(input)?;
        if json {
            let report = DurationReport {
                input,
                seconds: duration.as_secs(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{} = {}s", input, duration.as_secs());
        }
    }
    Ok(())
}

fn run_resolve(
    paths: &[String],
    env_file: Option<&Path>,
    isolated: bool,
    reveal: bool,
    logger: &Logger,
) -> Result<()> {
    let host = HostInfo::new(DEFAULT_HOST_NAME, VERSION);
    let sink = Arc::new(logger.clone());

    match env_file {
        Some(path) if isolated => {
            ensure_env_file(path)?;
            let env = MapEnv::from_env_file(path)?;
            logger
                .debug("Resolving against env file only")
                .field("path", path.display().to_string())
                .field("variables", env.len())
                .log();
            let adapter = EnvironmentVariableConfigAdapter::with_env(host, env, sink);
            print_resolved(&adapter, paths, reveal);
        }
        Some(path) => {
            ensure_env_file(path)?;
            EnvManager::load_env_file(path)?;
            logger
                .debug("Loaded environment file")
                .field("path", path.display().to_string())
                .log();
            print_resolved(&EnvironmentVariableConfigAdapter::new(host, sink), paths, reveal);
        }
        None => {
            print_resolved(&EnvironmentVariableConfigAdapter::new(host, sink), paths, reveal);
        }
    }
    Ok(())
}

fn ensure_env_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AppError::io(format!("env file not found: {}", path.display())))
    }
}

fn print_resolved<E: EnvSource>(
    adapter: &EnvironmentVariableConfigAdapter<E>,
    paths: &[String],
    reveal: bool,
) {
    for path in paths {
        match adapter.resolve(path) {
            Some(value) => {
                let masked = is_sensitive_path(path) && !reveal;
                let shown = if masked { REDACTED_VALUE } else { value.as_str() };
                println!("{}={}", path, shown);
            }
            None => println!("{} is not set ({})", path, env_var_name(path)),
        }
    }
}

fn run_example_env(output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            EnvManager::save_example_env_file(path)?;
            println!("Wrote example env file to {}", path.display());
        }
        None => print!("{}", EnvManager::create_example_env_content()),
    }
    Ok(())
}
