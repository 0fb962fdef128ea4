//! Collection wrapper types for displaying groups of records.

use std::fmt;

use crate::{
    filter::CategoryMask,
    models::{Artifact, Rarity, Visitor},
};

/// Newtype wrapper for displaying a list of visitors.
///
/// Handles the empty table with a "No visitors found." line.
pub struct Visitors(pub Vec<Visitor>);

impl Visitors {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Visitors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No visitors found.")
        } else {
            for visitor in &self.0 {
                write!(f, "{visitor}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of artifacts.
#[derive(Debug)]
pub struct Artifacts(pub Vec<Artifact>);

impl Artifacts {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Artifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No artifacts found.")
        } else {
            for artifact in &self.0 {
                write!(f, "{artifact}")?;
            }
            Ok(())
        }
    }
}

/// Artifacts that passed a rarity rule, together with the rule's mask.
#[derive(Debug)]
pub struct ClassifiedArtifacts {
    pub mask: CategoryMask<Rarity>,
    pub artifacts: Artifacts,
}

impl fmt::Display for ClassifiedArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let included: Vec<&str> = self.mask.included().map(|r| r.as_str()).collect();
        let included = if included.is_empty() {
            "none".to_string()
        } else {
            included.join(", ")
        };

        writeln!(f, "# Filtered Artifacts")?;
        writeln!(f)?;
        writeln!(f, "- **Included rarities**: {included}")?;
        writeln!(f)?;

        if self.artifacts.is_empty() {
            writeln!(f, "No artifacts match the selected criteria.")
        } else {
            write!(f, "{}", self.artifacts)
        }
    }
}
