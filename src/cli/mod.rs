// Command-line interface definitions

pub mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "media-resolver", version)]
#[command(about = "Resolve downloaded media files for an archived tweet log", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve media paths for every tweet in the log (the default)
    Resolve {
        /// Override the tweet log input path for this run
        #[arg(long)]
        input: Option<PathBuf>,

        /// Override the URL-to-name map path for this run
        #[arg(long)]
        url_map: Option<PathBuf>,

        /// Override the media working directory for this run
        #[arg(long)]
        workdir: Option<PathBuf>,

        /// Override the export path for this run
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the config file path and contents
    Config,

    /// Set the media working directory
    Workdir { dir: PathBuf },

    /// Set the tweet log input path
    Input { path: PathBuf },

    /// Set the URL-to-name map path
    UrlMap { path: PathBuf },

    /// Set the export path
    Output { path: PathBuf },

    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(ignore_case = true)]
        shell: Shell,
    },
}
