//! Data models for visitors, artifacts and credentials.
//!
//! Records mirror the on-disk tables: every field holds the stored text, so a
//! table that was hand-edited (odd casing, unknown statuses) survives a
//! load/save cycle unchanged. Typed views are available through accessors
//! such as [`Visitor::status_kind`] and [`Artifact::rarity_kind`].
//!
//! Enumerations that the menus offer as numbered options implement
//! [`Choice`], which maps a selection (a 1-based menu index or the option
//! name) to a variant and rejects everything else.
//!
//! # Examples
//!
//! ```rust
//! use library_core::models::{Choice, Rarity};
//!
//! assert_eq!(Rarity::from_selection("3").unwrap(), Rarity::High);
//! assert_eq!(Rarity::from_selection("forbidden").unwrap(), Rarity::Forbidden);
//! assert!(Rarity::from_selection("5").is_err());
//! ```

pub mod artifact;
pub mod credential;
pub mod delete;
pub mod status;
pub mod visitor;


pub use artifact::{Artifact, Rarity};
pub use credential::Credential;
pub use delete::DeleteMode;
pub use status::{ArtifactStatus, VisitorStatus};
pub use visitor::{Species, SpeciesChoice, Visitor};

use crate::error::{LibraryError, Result};

/// A fixed enumeration presented to the user as numbered options.
pub trait Choice: Copy + PartialEq + 'static {
    /// Field name reported in validation errors.
    const FIELD: &'static str;

    /// Selectable variants in declared (menu) order.
    const OPTIONS: &'static [Self];

    /// Canonical text stored in the tables.
    fn label(self) -> &'static str;

    /// Extra names accepted as a selection besides the label.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Resolves a selection: a 1-based index into [`Choice::OPTIONS`] or an
    /// option name (case-insensitive).
    fn from_selection(input: &str) -> Result<Self> {
        let input = input.trim();

        let selected = if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            input
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| Self::OPTIONS.get(index).copied())
        } else {
            Self::OPTIONS.iter().copied().find(|option| {
                option.label().eq_ignore_ascii_case(input)
                    || option
                        .aliases()
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(input))
            })
        };

        selected.ok_or_else(|| {
            LibraryError::validation(Self::FIELD).with_reason(format!(
                "'{input}' is not a valid option (choose 1-{}: {})",
                Self::OPTIONS.len(),
                Self::menu_labels()
            ))
        })
    }

    /// Options rendered as `1 = Low, 2 = Medium, ...`.
    fn menu_labels() -> String {
        Self::OPTIONS
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{} = {}", i + 1, option.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Checks that a required free-text field is not blank and returns it trimmed.
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::validation(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}
