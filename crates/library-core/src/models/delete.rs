//! Delete mode selection.

use serde::{Deserialize, Serialize};

use super::Choice;

/// How a delete operation disposes of a record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Remove the row from the table
    Hard,

    /// Keep the row and move it to the terminal status
    Soft,
}

impl Choice for DeleteMode {
    const FIELD: &'static str = "delete option";

    const OPTIONS: &'static [Self] = &[DeleteMode::Hard, DeleteMode::Soft];

    fn label(self) -> &'static str {
        match self {
            DeleteMode::Hard => "hard",
            DeleteMode::Soft => "soft",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DeleteMode::Hard => &["a", "remove"],
            DeleteMode::Soft => &["b", "mark"],
        }
    }
}
