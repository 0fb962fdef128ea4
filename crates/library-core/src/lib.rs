//! Core library for the Galactic Library administration tool.
//!
//! This crate keeps track of two kinds of records, visitors and artifacts,
//! stored in flat CSV tables, and provides the operations the menus expose:
//! registration, listing, lookup, status updates, soft and hard deletes,
//! rarity classification and statistics. Access is gated by a plaintext
//! credentials table (see [`auth`]).
//!
//! # Modules
//!
//! - [`store`]: typed CSV tables and id/code generation
//! - [`filter`]: `index=choice` classification rules
//! - [`stats`]: visitor and artifact aggregations
//! - [`library`]: the [`Library`] facade tying the above together
//! - [`display`]: markdown formatting for records and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use library_core::{params::RegisterVisitor, LibraryBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = LibraryBuilder::new()
//!     .with_data_dir(Some("/tmp/galactic-library"))
//!     .build()?;
//!
//! let visitor = library.register_visitor(&RegisterVisitor {
//!     name: "Ada".to_string(),
//!     species: "1".to_string(),
//!     other_species: None,
//!     status: "active".to_string(),
//! })?;
//! println!("Registered visitor {}", visitor.id);
//!
//! println!("{}", library.visitor_statistics()?);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod library;
pub mod models;
pub mod params;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use auth::CredentialStore;
pub use config::LibraryConfig;
pub use display::{
    Artifacts, ClassifiedArtifacts, CreateResult, DeleteResult, OperationStatus, UpdateResult,
    Visitors,
};
pub use error::{LibraryError, Result, RuleError};
pub use filter::CategoryMask;
pub use library::{Library, LibraryBuilder};
pub use models::{
    Artifact, ArtifactStatus, Choice, Credential, DeleteMode, Rarity, Species, Visitor,
    VisitorStatus,
};
pub use params::{
    DeleteRecord, RegisterArtifact, RegisterVisitor, ToggleVisitorStatus, UpdateArtifact,
};
pub use stats::{ArtifactStats, VisitorStats};
pub use store::{Record, Table};
