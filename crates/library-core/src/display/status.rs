//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::error::LibraryError;

/// Wrapper type for displaying operation confirmation messages.
///
/// Used by the menus to report outcomes that carry no record, such as a
/// rejected selection or a failed lookup.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&LibraryError> for OperationStatus {
    fn from(error: &LibraryError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Status updated".to_string());
        assert_eq!(format!("{success}"), "Success: Status updated\n");

        let failure = OperationStatus::failure("Visitor '9' not found".to_string());
        assert!(format!("{failure}").starts_with("Error:"));
    }

    #[test]
    fn test_from_library_error() {
        let err = LibraryError::duplicate("Artifact", "ART1");
        let status = OperationStatus::from(&err);
        assert!(!status.success);
        assert_eq!(format!("{status}"), "Error: Artifact 'ART1' already exists\n");
    }
}
