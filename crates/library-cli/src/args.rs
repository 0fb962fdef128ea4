use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ArtifactCommands, VisitorCommands};

/// Administration tool for the Galactic Library
///
/// Tracks visitors and artifacts in CSV tables. Run without a subcommand for
/// the interactive login and menus, or use the `visitor` and `artifact`
/// subcommands for one-shot operations authenticated with `--username` and
/// `--password`.
#[derive(Parser)]
#[command(version, about, name = "library")]
pub struct Args {
    /// Directory holding visitors.csv and artifacts.csv. Defaults to
    /// $XDG_DATA_HOME/galactic-library/tables
    #[arg(long, global = true, env = "LIBRARY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Admin credentials table. Defaults to admin_access.csv inside the data
    /// directory
    #[arg(long, global = true)]
    pub credentials_file: Option<PathBuf>,

    /// Admin username for subcommands
    #[arg(long, global = true, env = "LIBRARY_USERNAME")]
    pub username: Option<String>,

    /// Admin password for subcommands
    #[arg(long, global = true, env = "LIBRARY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the library CLI
///
/// - `visitor`: register, inspect, update and delete visitors
/// - `artifact`: register, inspect, classify, update and delete artifacts
/// - `menu`: interactive login and menus (the default)
#[derive(Subcommand)]
pub enum Commands {
    /// Manage visitors
    #[command(alias = "v")]
    Visitor {
        #[command(subcommand)]
        command: VisitorCommands,
    },
    /// Manage artifacts
    #[command(alias = "a")]
    Artifact {
        #[command(subcommand)]
        command: ArtifactCommands,
    },
    /// Log in and navigate the interactive menus
    Menu,
}
