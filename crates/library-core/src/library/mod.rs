//! High-level library API for managing visitors and artifacts.
//!
//! [`Library`] is the single entry point used by every interface. It owns one
//! table per record kind and implements registration, lookup, updates,
//! deletes, classification and statistics on top of them.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Menus / CLI    │    │    Library      │    │  Table<Visitor> │
//! │   (library-cli) │───▶│ (visitor_ops,   │───▶│  Table<Artifact>│
//! │                 │    │  artifact_ops)  │    │   (CSV files)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every mutating operation validates its parameters before touching a
//! table, so a failed call leaves both tables exactly as they were.
//!
//! # Usage
//!
//! ```rust,no_run
//! use library_core::{params::RegisterArtifact, LibraryBuilder};
//!
//! # fn example() -> library_core::Result<()> {
//! let library = LibraryBuilder::new()
//!     .with_data_dir(Some("/tmp/galactic-library"))
//!     .build()?;
//!
//! let artifact = library.register_artifact(&RegisterArtifact {
//!     code: None,
//!     description: "Star chart".to_string(),
//!     rarity: "3".to_string(),
//!     status: "stored".to_string(),
//! })?;
//! assert_eq!(artifact.code, "ART1");
//!
//! let high_only = library.classify_artifacts("3=1")?;
//! println!("{high_only}");
//! # Ok(())
//! # }
//! ```

pub mod artifact_ops;
pub mod builder;
pub mod visitor_ops;


pub use builder::LibraryBuilder;

use crate::{
    auth::CredentialStore,
    config::LibraryConfig,
    error::{LibraryError, Result},
    models::{Artifact, DeleteMode, Visitor},
    store::{Record, Table},
};

/// Main library interface for managing visitors and artifacts.
#[derive(Debug, Clone)]
pub struct Library {
    config: LibraryConfig,
    visitors: Table<Visitor>,
    artifacts: Table<Artifact>,
}

impl Library {
    /// Creates a library over the tables named by `config`.
    pub(crate) fn new(config: LibraryConfig) -> Self {
        Self {
            visitors: Table::new(config.visitors_path()),
            artifacts: Table::new(config.artifacts_path()),
            config,
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Credential store for the configured admin access table.
    pub fn credentials(&self) -> CredentialStore {
        CredentialStore::new(&self.config.credentials_path)
    }
}

/// Shared delete path: a hard delete drops the row, a soft delete applies
/// `mark` to it in place. Returns the record as it was removed or as it now
/// stands.
fn delete_from<R, F>(table: &Table<R>, key: &str, mode: DeleteMode, mark: F) -> Result<R>
where
    R: Record + Clone,
    F: FnOnce(&mut R),
{
    let mut records = table.load()?;
    let position = records
        .iter()
        .position(|record| record.key() == key)
        .ok_or_else(|| LibraryError::not_found(R::KIND, key))?;

    let affected = match mode {
        DeleteMode::Hard => records.remove(position),
        DeleteMode::Soft => {
            mark(&mut records[position]);
            records[position].clone()
        }
    };

    table.save(&records)?;
    Ok(affected)
}
