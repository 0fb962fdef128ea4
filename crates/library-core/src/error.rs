//! Error types for the library core.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all library operations.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Empty required field or a selection that maps to no option
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Malformed classification rule string
    #[error("Invalid filter rule: {0}")]
    InvalidRule(#[from] RuleError),
    /// No record with the given id or code
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },
    /// A record with the given id or code already exists
    #[error("{kind} '{key}' already exists")]
    Duplicate { kind: &'static str, key: String },
    /// The credentials table is missing
    #[error("Credentials file not found: {}", path.display())]
    CredentialsUnavailable { path: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// CSV read or write errors
    #[error("Table error: {message}")]
    Table {
        message: String,
        #[source]
        source: csv::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Reasons a classification rule string is rejected.
///
/// Parsing stops at the first offending pair, so only one reason is ever
/// reported for a given input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("no rules provided")]
    Empty,
    #[error("invalid pair '{pair}', expected index=choice")]
    MalformedPair { pair: String },
    #[error("invalid numbers in pair '{pair}', use digits only")]
    NotNumeric { pair: String },
    #[error("index '{index}' in pair '{pair}' must be between 1 and {max}")]
    IndexOutOfRange {
        index: String,
        max: usize,
        pair: String,
    },
    #[error("choice '{choice}' in pair '{pair}' must be 1 (include) or 2 (exclude)")]
    InvalidChoice { choice: String, pair: String },
}

/// Builder for creating input validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LibraryError {
        LibraryError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LibraryError {
    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates a not-found error for a record kind.
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Creates a duplicate-key error for a record kind.
    pub fn duplicate(kind: &'static str, key: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            key: key.into(),
        }
    }

    /// Creates a file system error for a path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a user-facing outcome that leaves every table
    /// untouched, as opposed to an I/O or environment failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidRule(_)
                | Self::NotFound { .. }
                | Self::Duplicate { .. }
        )
    }
}

/// Extension trait for mapping CSV errors with a message.
pub trait TableResultExt<T> {
    /// Map CSV errors with a message.
    fn table_context(self, message: &str) -> Result<T>;
}

impl<T> TableResultExt<T> for std::result::Result<T, csv::Error> {
    fn table_context(self, message: &str) -> Result<T> {
        self.map_err(|source| LibraryError::Table {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_builder() {
        let err = LibraryError::validation("name").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_not_found_display() {
        let err = LibraryError::not_found("Visitor", "42");
        assert_eq!(err.to_string(), "Visitor '42' not found");
    }

    #[test]
    fn test_rule_error_is_recoverable() {
        let err: LibraryError = RuleError::Empty.into();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid filter rule: no rules provided");
    }

    #[test]
    fn test_file_system_error_is_not_recoverable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LibraryError::file_system("/tmp/visitors.csv", io_err);
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("/tmp/visitors.csv"));
    }
}
