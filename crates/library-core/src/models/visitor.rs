//! Visitor record and species classification.

use serde::{Deserialize, Serialize};

use super::{require_text, Choice, VisitorStatus};
use crate::{
    error::Result,
    store::{ids::canonical_digits, Record},
};

/// A registered visitor, one row of the visitors table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visitor {
    /// Auto-assigned numeric identifier, stored as text
    pub id: String,

    /// Display name
    pub name: String,

    /// `human`, `android` or any free-form species
    pub species: String,

    /// `active`, `retired` or `deleted`
    pub status: String,
}

impl Visitor {
    /// The id as a canonical digit string (leading zeros dropped), when it
    /// consists of digits only. Ids of any length qualify.
    pub fn numeric_id(&self) -> Option<&str> {
        canonical_digits(&self.id)
    }

    /// Parsed status; `None` for values outside the known set.
    pub fn status_kind(&self) -> Option<VisitorStatus> {
        self.status.parse().ok()
    }
}

impl Record for Visitor {
    const KIND: &'static str = "Visitor";
    const COLUMNS: &'static [&'static str] = &["id", "name", "species", "status"];

    fn key(&self) -> &str {
        &self.id
    }

    fn from_row(row: Vec<String>) -> Self {
        let mut fields = row.into_iter();
        let mut next = move || fields.next().unwrap_or_default();
        Self {
            id: next(),
            name: next(),
            species: next(),
            status: next(),
        }
    }

    fn to_row(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.species.as_str(),
            self.status.as_str(),
        ]
    }
}

/// Species options offered at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesChoice {
    Human,
    Android,
    /// Free-form species supplied separately
    Other,
}

impl Choice for SpeciesChoice {
    const FIELD: &'static str = "species";

    const OPTIONS: &'static [Self] = &[
        SpeciesChoice::Human,
        SpeciesChoice::Android,
        SpeciesChoice::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            SpeciesChoice::Human => "human",
            SpeciesChoice::Android => "android",
            SpeciesChoice::Other => "other",
        }
    }
}

/// Resolved species of a visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Species {
    Human,
    Android,
    Other(String),
}

impl Species {
    /// Resolves a species selection. Choosing "other" requires the free-form
    /// species text, which must not be blank.
    pub fn from_selection(selection: &str, other: Option<&str>) -> Result<Self> {
        match SpeciesChoice::from_selection(selection)? {
            SpeciesChoice::Human => Ok(Species::Human),
            SpeciesChoice::Android => Ok(Species::Android),
            SpeciesChoice::Other => {
                let text = require_text("species", other.unwrap_or_default())?;
                Ok(Species::Other(text))
            }
        }
    }

    /// Convert to table string representation
    pub fn as_str(&self) -> &str {
        match self {
            Species::Human => "human",
            Species::Android => "android",
            Species::Other(species) => species,
        }
    }
}
