//! Display formatting for records, collections and operation results.
//!
//! Records implement [`std::fmt::Display`] directly (see [`models`]); the
//! wrapper types here add context such as "registered", "updated" or
//! "deleted" messages, empty-collection handling and statistics layouts. All
//! output is markdown so the CLI can render it richly or print it as is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers & Stats│    │   Formatted     │
//! │(Visitor,Artifact)───▶│  Display impls  │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use library_core::{display::Visitors, models::Visitor};
//!
//! let empty = Visitors(vec![]);
//! assert_eq!(format!("{empty}"), "No visitors found.\n");
//!
//! let visitors = Visitors(vec![Visitor {
//!     id: "1".to_string(),
//!     name: "Ada".to_string(),
//!     species: "human".to_string(),
//!     status: "active".to_string(),
//! }]);
//! assert!(format!("{visitors}").contains("Ada"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod stats;
pub mod status;

pub use collections::{Artifacts, ClassifiedArtifacts, Visitors};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
