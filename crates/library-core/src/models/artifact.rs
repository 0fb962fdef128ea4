//! Artifact record and rarity classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Choice;
use crate::store::{ids::canonical_digits, Record};

/// Prefix of generated artifact codes.
pub const CODE_PREFIX: &str = "ART";

/// A catalogued artifact, one row of the artifacts table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    /// Unique code, user-supplied or generated as `ART<n>`
    pub code: String,

    /// Free-text description
    pub description: String,

    /// `Low`, `Medium`, `High` or `Forbidden`
    pub rarity: String,

    /// `Stored`, `Under Study` or `Destroyed`
    pub status: String,
}

impl Artifact {
    /// Digit suffix of a generated-style code (`ART012` -> `12`).
    pub fn generated_suffix(&self) -> Option<&str> {
        canonical_digits(self.code.strip_prefix(CODE_PREFIX)?)
    }

    /// Parsed rarity; `None` for values outside the known set.
    pub fn rarity_kind(&self) -> Option<Rarity> {
        self.rarity.parse().ok()
    }
}

impl Record for Artifact {
    const KIND: &'static str = "Artifact";
    const COLUMNS: &'static [&'static str] = &["code", "description", "rarity", "status"];

    fn key(&self) -> &str {
        &self.code
    }

    fn from_row(row: Vec<String>) -> Self {
        let mut fields = row.into_iter();
        let mut next = move || fields.next().unwrap_or_default();
        Self {
            code: next(),
            description: next(),
            rarity: next(),
            status: next(),
        }
    }

    fn to_row(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.description.as_str(),
            self.rarity.as_str(),
            self.status.as_str(),
        ]
    }
}

/// Rarity classes in declared order; the order defines the filter indexes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rarity {
    Low,
    Medium,
    High,
    Forbidden,
}

impl Rarity {
    /// Convert to table string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Low => "Low",
            Rarity::Medium => "Medium",
            Rarity::High => "High",
            Rarity::Forbidden => "Forbidden",
        }
    }
}

impl FromStr for Rarity {
    type Err = String;

    /// Exact match on the stored label, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::OPTIONS
            .iter()
            .copied()
            .find(|rarity| rarity.as_str() == s.trim())
            .ok_or_else(|| format!("Invalid rarity: {s}"))
    }
}

impl Choice for Rarity {
    const FIELD: &'static str = "rarity";

    const OPTIONS: &'static [Self] = &[
        Rarity::Low,
        Rarity::Medium,
        Rarity::High,
        Rarity::Forbidden,
    ];

    fn label(self) -> &'static str {
        self.as_str()
    }
}
