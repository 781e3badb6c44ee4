// Command handler implementations

use crate::cli::{Cli, Commands};
use crate::config::{ResolverConfig, get_config_path};
use crate::log_info;
use crate::resolver::MediaResolver;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

pub fn handle(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Resolve {
            input,
            url_map,
            workdir,
            output,
        }) => handle_resolve(input, url_map, workdir, output),
        Some(Commands::Config) => handle_config(),
        Some(Commands::Workdir { dir }) => handle_workdir(dir),
        Some(Commands::Input { path }) => handle_input(path),
        Some(Commands::UrlMap { path }) => handle_url_map(path),
        Some(Commands::Output { path }) => handle_output(path),
        Some(Commands::Completions { shell }) => handle_completions(shell),
        None => handle_resolve(None, None, None, None),
    }
}

/// Handle resolve command; path overrides apply to this run only
fn handle_resolve(
    input: Option<PathBuf>,
    url_map: Option<PathBuf>,
    workdir: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    log_info!("Executing resolve command");

    let mut config = ResolverConfig::load()?;
    if let Some(input) = input {
        config.log_path = input;
    }
    if let Some(url_map) = url_map {
        config.url_map_path = url_map;
    }
    if let Some(workdir) = workdir {
        config.working_dir = workdir;
    }
    if let Some(output) = output {
        config.export_path = output;
    }

    MediaResolver::new(config).run()?;
    Ok(())
}

/// Handle config command
fn handle_config() -> Result<()> {
    let config = ResolverConfig::load()?;
    let config_path = get_config_path();

    println!("Config file: {}", config_path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn handle_workdir(dir: PathBuf) -> Result<()> {
    log_info!("Setting working directory to: {}", dir.display());

    let mut config = ResolverConfig::load()?;
    config.working_dir = dir;
    config.save()?;

    println!("Working directory set to: {}", config.working_dir.display());
    Ok(())
}

fn handle_input(path: PathBuf) -> Result<()> {
    log_info!("Setting input log path to: {}", path.display());

    let mut config = ResolverConfig::load()?;
    config.log_path = path;
    config.save()?;

    println!("Input log path set to: {}", config.log_path.display());
    Ok(())
}

fn handle_url_map(path: PathBuf) -> Result<()> {
    log_info!("Setting URL map path to: {}", path.display());

    let mut config = ResolverConfig::load()?;
    config.url_map_path = path;
    config.save()?;

    println!("URL map path set to: {}", config.url_map_path.display());
    Ok(())
}

fn handle_output(path: PathBuf) -> Result<()> {
    log_info!("Setting export path to: {}", path.display());

    let mut config = ResolverConfig::load()?;
    config.export_path = path;
    config.save()?;

    println!("Export path set to: {}", config.export_path.display());
    Ok(())
}

/// Handle completions command
fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
