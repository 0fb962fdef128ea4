//! Parameter structures for library operations
//!
//! These structures are shared by every interface (scriptable subcommands and
//! the interactive menus) and carry no framework-specific derives. Selection
//! fields hold the raw user input (`"2"`, `"android"`, `"Under Study"`); the
//! library resolves and validates them, so a caller never has to pre-validate.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   Menu prompts  │    │  Core Params    │
//! │  (clap derives) │───▶│  (raw strings)  │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Parameters for registering a visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterVisitor {
    /// Visitor name (required)
    pub name: String,
    /// Species selection: `1`/`human`, `2`/`android` or `3`/`other`
    pub species: String,
    /// Free-form species, required when `species` selects "other"
    pub other_species: Option<String>,
    /// Status selection: `1`/`active` or `2`/`retired`
    pub status: String,
}

/// Parameters for flipping a visitor between active and retired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleVisitorStatus {
    /// Visitor id
    pub id: String,
    /// Status selection used when the current status is neither active nor
    /// retired
    pub fallback: Option<String>,
}

/// Parameters for registering an artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterArtifact {
    /// Artifact code; blank or absent generates the next `ART<n>` code
    pub code: Option<String>,
    /// Description (required)
    pub description: String,
    /// Rarity selection: `1`-`4` or the rarity name
    pub rarity: String,
    /// Status selection: `1`-`3` or the status name
    pub status: String,
}

/// Parameters for rewriting an artifact's classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArtifact {
    /// Artifact code
    pub code: String,
    /// New rarity selection
    pub rarity: Option<String>,
    /// New status selection
    pub status: Option<String>,
}

/// Parameters for deleting a visitor or an artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRecord {
    /// Visitor id or artifact code
    pub key: String,
    /// Delete option: `A`/`hard`/`remove` or `B`/`soft`/`mark`
    pub mode: String,
}
