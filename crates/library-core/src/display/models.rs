//! Display implementations for domain models.

use std::fmt;

use crate::models::{Artifact, ArtifactStatus, DeleteMode, Rarity, Visitor, VisitorStatus};

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteMode::Hard => write!(f, "remove permanently"),
            DeleteMode::Soft => write!(f, "mark as terminal status"),
        }
    }
}

impl fmt::Display for Visitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Species**: {}", self.species)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.code)?;
        writeln!(f)?;
        writeln!(f, "- **Description**: {}", self.description)?;
        writeln!(f, "- **Rarity**: {}", self.rarity)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f)
    }
}
