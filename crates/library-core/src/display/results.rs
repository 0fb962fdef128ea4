//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of register,
//! update and delete operations with consistent messaging and record display.

use std::fmt;

use crate::models::{Artifact, DeleteMode, Visitor};

/// Wrapper type for displaying the result of a registration.
///
/// # Examples
///
/// ```rust
/// use library_core::{display::CreateResult, models::Artifact};
///
/// let artifact = Artifact {
///     code: "ART1".to_string(),
///     description: "Star chart".to_string(),
///     rarity: "High".to_string(),
///     status: "Stored".to_string(),
/// };
///
/// let output = format!("{}", CreateResult::new(artifact));
/// assert!(output.contains("Artifact registered with code: ART1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Visitor> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visitor registered with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Artifact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Artifact registered with code: {}", self.resource.code)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of an update, with the list of
/// changes that were applied.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Visitor> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated visitor with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Artifact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated artifact with code: {}", self.resource.code)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a delete.
///
/// For a soft delete `resource` holds the record as it now stands, with its
/// terminal status.
#[derive(Debug)]
pub struct DeleteResult<T> {
    pub resource: T,
    pub mode: DeleteMode,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T, mode: DeleteMode) -> Self {
        Self { resource, mode }
    }
}

impl fmt::Display for DeleteResult<Visitor> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Visitor { id, name, .. } = &self.resource;
        match self.mode {
            DeleteMode::Hard => writeln!(f, "Visitor '{name}' (ID: {id}) removed."),
            DeleteMode::Soft => writeln!(f, "Visitor '{name}' (ID: {id}) marked as deleted."),
        }
    }
}

impl fmt::Display for DeleteResult<Artifact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = &self.resource.code;
        match self.mode {
            DeleteMode::Hard => writeln!(f, "Artifact '{code}' removed."),
            DeleteMode::Soft => writeln!(f, "Artifact '{code}' marked as Destroyed."),
        }
    }
}
