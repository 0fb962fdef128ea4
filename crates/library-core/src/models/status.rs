//! Status enumerations for visitors and artifacts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Choice;

/// Type-safe enumeration of visitor statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VisitorStatus {
    /// Visitor currently has access
    Active,

    /// Visitor no longer visits
    Retired,

    /// Soft-deleted visitor, kept for history
    Deleted,
}

impl VisitorStatus {
    /// Convert to table string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorStatus::Active => "active",
            VisitorStatus::Retired => "retired",
            VisitorStatus::Deleted => "deleted",
        }
    }

    /// The other side of the active/retired toggle, if there is one.
    pub fn toggled(self) -> Option<Self> {
        match self {
            VisitorStatus::Active => Some(VisitorStatus::Retired),
            VisitorStatus::Retired => Some(VisitorStatus::Active),
            VisitorStatus::Deleted => None,
        }
    }
}

impl FromStr for VisitorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(VisitorStatus::Active),
            "retired" => Ok(VisitorStatus::Retired),
            "deleted" => Ok(VisitorStatus::Deleted),
            _ => Err(format!("Invalid visitor status: {s}")),
        }
    }
}

impl Choice for VisitorStatus {
    const FIELD: &'static str = "status";

    // Deleted is reached through the delete operation, never selected.
    const OPTIONS: &'static [Self] = &[VisitorStatus::Active, VisitorStatus::Retired];

    fn label(self) -> &'static str {
        self.as_str()
    }
}

/// Type-safe enumeration of artifact statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Artifact is in storage
    Stored,

    /// Artifact is being researched
    #[serde(rename = "Under Study")]
    UnderStudy,

    /// Artifact was destroyed (terminal)
    Destroyed,
}

impl ArtifactStatus {
    /// Convert to table string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactStatus::Stored => "Stored",
            ArtifactStatus::UnderStudy => "Under Study",
            ArtifactStatus::Destroyed => "Destroyed",
        }
    }
}

impl FromStr for ArtifactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stored" => Ok(ArtifactStatus::Stored),
            "under study" | "under_study" | "understudy" => Ok(ArtifactStatus::UnderStudy),
            "destroyed" => Ok(ArtifactStatus::Destroyed),
            _ => Err(format!("Invalid artifact status: {s}")),
        }
    }
}

impl Choice for ArtifactStatus {
    const FIELD: &'static str = "status";

    const OPTIONS: &'static [Self] = &[
        ArtifactStatus::Stored,
        ArtifactStatus::UnderStudy,
        ArtifactStatus::Destroyed,
    ];

    fn label(self) -> &'static str {
        self.as_str()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ArtifactStatus::UnderStudy => &["under-study", "under_study", "understudy"],
            _ => &[],
        }
    }
}
