//! Subcommand arguments and their handlers.
//!
//! Each clap argument struct converts into the matching core parameter type,
//! so the core crate never sees clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Library
//! ```
//!
//! Selections (species, status, rarity) stay plain strings here and accept
//! the same menu index or option name the interactive menus do; the core
//! validates them.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use library_core::{
    params::{DeleteRecord, RegisterArtifact, RegisterVisitor, ToggleVisitorStatus, UpdateArtifact},
    Artifacts, CreateResult, Library, Visitors,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Visitor arguments
// ============================================================================

/// Register a new visitor
#[derive(Args)]
pub struct RegisterVisitorArgs {
    /// Visitor name
    pub name: String,
    #[arg(short, long, help = "Species: 1|human, 2|android, 3|other")]
    pub species: String,
    #[arg(long, help = "Species name, required when --species is other")]
    pub other_species: Option<String>,
    #[arg(long, default_value = "active", help = "Status: 1|active, 2|retired")]
    pub status: String,
}

impl From<RegisterVisitorArgs> for RegisterVisitor {
    fn from(val: RegisterVisitorArgs) -> Self {
        RegisterVisitor {
            name: val.name,
            species: val.species,
            other_species: val.other_species,
            status: val.status,
        }
    }
}

/// Flip a visitor between active and retired
#[derive(Args)]
pub struct ToggleStatusArgs {
    #[arg(help = "ID of the visitor to update")]
    pub id: String,
    #[arg(
        long,
        help = "Status when the current one is not active or retired (1|active, 2|retired)"
    )]
    pub fallback: Option<String>,
}

impl From<ToggleStatusArgs> for ToggleVisitorStatus {
    fn from(val: ToggleStatusArgs) -> Self {
        ToggleVisitorStatus {
            id: val.id,
            fallback: val.fallback,
        }
    }
}

#[derive(Subcommand)]
pub enum VisitorCommands {
    #[command(alias = "r")]
    Register(RegisterVisitorArgs),
    /// List every visitor, soft-deleted ones included
    #[command(alias = "l")]
    List,
    /// Show a visitor by ID
    #[command(alias = "s")]
    Show(KeyArgs),
    #[command(alias = "t")]
    ToggleStatus(ToggleStatusArgs),
    /// Delete a visitor (hard removes the row, soft marks it deleted)
    #[command(alias = "d")]
    Delete(DeleteArgs),
    /// Visitor statistics (deleted visitors excluded from the totals)
    Stats(StatsArgs),
}

// ============================================================================
// Artifact arguments
// ============================================================================

/// Register a new artifact
#[derive(Args)]
pub struct RegisterArtifactArgs {
    /// Artifact description
    pub description: String,
    #[arg(short, long, help = "Artifact code; generated as ART<n> when omitted")]
    pub code: Option<String>,
    #[arg(short, long, help = "Rarity: 1|Low, 2|Medium, 3|High, 4|Forbidden")]
    pub rarity: String,
    #[arg(
        short,
        long,
        default_value = "stored",
        help = "Status: 1|Stored, 2|Under Study, 3|Destroyed"
    )]
    pub status: String,
}

impl From<RegisterArtifactArgs> for RegisterArtifact {
    fn from(val: RegisterArtifactArgs) -> Self {
        RegisterArtifact {
            code: val.code,
            description: val.description,
            rarity: val.rarity,
            status: val.status,
        }
    }
}

/// Change the rarity and/or status of an artifact
#[derive(Args)]
pub struct UpdateArtifactArgs {
    #[arg(help = "Code of the artifact to update")]
    pub code: String,
    #[arg(short, long, help = "New rarity: 1|Low, 2|Medium, 3|High, 4|Forbidden")]
    pub rarity: Option<String>,
    #[arg(short, long, help = "New status: 1|Stored, 2|Under Study, 3|Destroyed")]
    pub status: Option<String>,
}

impl From<UpdateArtifactArgs> for UpdateArtifact {
    fn from(val: UpdateArtifactArgs) -> Self {
        UpdateArtifact {
            code: val.code,
            rarity: val.rarity,
            status: val.status,
        }
    }
}

/// Filter artifacts by rarity
#[derive(Args)]
pub struct ClassifyArgs {
    /// Comma-separated index=choice pairs; index 1-4 is Low, Medium, High,
    /// Forbidden and choice is 1 (include) or 2 (exclude). Example: 1=1,3=1
    pub rules: String,
}

#[derive(Subcommand)]
pub enum ArtifactCommands {
    #[command(alias = "r")]
    Register(RegisterArtifactArgs),
    /// List every artifact, destroyed ones included
    #[command(alias = "l")]
    List,
    /// Show an artifact by code
    #[command(alias = "s")]
    Show(KeyArgs),
    #[command(alias = "c")]
    Classify(ClassifyArgs),
    #[command(alias = "u")]
    Update(UpdateArtifactArgs),
    /// Delete an artifact (hard removes the row, soft marks it Destroyed)
    #[command(alias = "d")]
    Delete(DeleteArgs),
    /// Artifact statistics
    Stats(StatsArgs),
}

// ============================================================================
// Shared arguments
// ============================================================================

#[derive(Args)]
pub struct KeyArgs {
    #[arg(help = "Visitor ID or artifact code")]
    pub key: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Visitor ID or artifact code")]
    pub key: String,
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        help = "hard (remove the row) or soft (mark it)"
    )]
    pub mode: DeleteModeArg,
}

impl From<DeleteArgs> for DeleteRecord {
    fn from(val: DeleteArgs) -> Self {
        DeleteRecord {
            key: val.key,
            mode: val.mode.to_string(),
        }
    }
}

#[derive(Args)]
pub struct StatsArgs {
    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DeleteModeArg {
    #[value(alias = "a")]
    Hard,
    #[value(alias = "b")]
    Soft,
}

impl std::fmt::Display for DeleteModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteModeArg::Hard => write!(f, "hard"),
            DeleteModeArg::Soft => write!(f, "soft"),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs subcommands against a library and renders their results.
pub struct Cli {
    library: Library,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(library: Library, renderer: TerminalRenderer) -> Self {
        Self { library, renderer }
    }

    pub fn handle_visitor_command(&self, command: VisitorCommands) -> Result<()> {
        match command {
            VisitorCommands::Register(args) => {
                let visitor = self
                    .library
                    .register_visitor(&args.into())
                    .context("Failed to register visitor")?;
                self.renderer.render(&CreateResult::new(visitor).to_string())
            }
            VisitorCommands::List => {
                let visitors = self.library.list_visitors()?;
                self.renderer.render(&Visitors(visitors).to_string())
            }
            VisitorCommands::Show(args) => {
                let visitor = self.library.find_visitor(&args.key)?;
                self.renderer.render(&visitor.to_string())
            }
            VisitorCommands::ToggleStatus(args) => {
                let result = self
                    .library
                    .toggle_visitor_status(&args.into())
                    .context("Failed to update visitor status")?;
                self.renderer.render(&result.to_string())
            }
            VisitorCommands::Delete(args) => {
                let result = self
                    .library
                    .delete_visitor(&args.into())
                    .context("Failed to delete visitor")?;
                self.renderer.render(&result.to_string())
            }
            VisitorCommands::Stats(args) => {
                let stats = self.library.visitor_statistics()?;
                self.render_stats(&stats, &args)
            }
        }
    }

    pub fn handle_artifact_command(&self, command: ArtifactCommands) -> Result<()> {
        match command {
            ArtifactCommands::Register(args) => {
                let artifact = self
                    .library
                    .register_artifact(&args.into())
                    .context("Failed to register artifact")?;
                self.renderer.render(&CreateResult::new(artifact).to_string())
            }
            ArtifactCommands::List => {
                let artifacts = self.library.list_artifacts()?;
                self.renderer.render(&Artifacts(artifacts).to_string())
            }
            ArtifactCommands::Show(args) => {
                let artifact = self.library.find_artifact(&args.key)?;
                self.renderer.render(&artifact.to_string())
            }
            ArtifactCommands::Classify(args) => {
                let classified = self.library.classify_artifacts(&args.rules)?;
                self.renderer.render(&classified.to_string())
            }
            ArtifactCommands::Update(args) => {
                let result = self
                    .library
                    .reclassify_artifact(&args.into())
                    .context("Failed to update artifact")?;
                self.renderer.render(&result.to_string())
            }
            ArtifactCommands::Delete(args) => {
                let result = self
                    .library
                    .delete_artifact(&args.into())
                    .context("Failed to delete artifact")?;
                self.renderer.render(&result.to_string())
            }
            ArtifactCommands::Stats(args) => {
                let stats = self.library.artifact_statistics()?;
                self.render_stats(&stats, &args)
            }
        }
    }

    fn render_stats<S>(&self, stats: &S, args: &StatsArgs) -> Result<()>
    where
        S: Serialize + std::fmt::Display,
    {
        if args.json {
            println!("{}", serde_json::to_string_pretty(stats)?);
            Ok(())
        } else {
            self.renderer.render(&stats.to_string())
        }
    }
}
