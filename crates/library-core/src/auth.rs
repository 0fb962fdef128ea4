//! Credential check gating access to the library.
//!
//! Credentials live in a plaintext `username,password` table. Unlike the
//! record tables it is never created on demand: a missing file means nobody
//! can log in.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{
    error::{LibraryError, Result},
    models::{require_text, Credential},
    store::Table,
};

/// Read-only view of the admin credentials table.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    table: Table<Credential>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: Table::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.table.path()
    }

    /// Checks a username/password pair against the table.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::CredentialsUnavailable` when the table does not
    /// exist and `LibraryError::Validation` when either input is blank.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        if !self.path().is_file() {
            return Err(LibraryError::CredentialsUnavailable {
                path: self.path().to_path_buf(),
            });
        }

        let username = require_text("username", username)?;
        let password = require_text("password", password)?;

        let granted = self
            .table
            .load()?
            .iter()
            .any(|credential| credential.matches(&username, &password));

        if granted {
            debug!("Login granted for '{username}'");
        } else {
            warn!("Login rejected for '{username}'");
        }
        Ok(granted)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn create_store(contents: &str) -> (TempDir, CredentialStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("admin_access.csv");
        fs::write(&path, contents).expect("Failed to write credentials");
        (temp_dir, CredentialStore::new(path))
    }

    #[test]
    fn test_authenticate_matching_pair() {
        let (_temp_dir, store) = create_store("username,password\nadmin,secret\n");
        assert!(store.authenticate("admin", "secret").unwrap());
        assert!(store.authenticate("  admin ", " secret ").unwrap());
    }

    #[test]
    fn test_authenticate_trims_stored_values() {
        let (_temp_dir, store) = create_store("username,password\n keeper , vault \n");
        assert!(store.authenticate("keeper", "vault").unwrap());
    }

    #[test]
    fn test_authenticate_rejects_wrong_password() {
        let (_temp_dir, store) = create_store("username,password\nadmin,secret\n");
        assert!(!store.authenticate("admin", "guess").unwrap());
        assert!(!store.authenticate("secret", "admin").unwrap());
    }

    #[test]
    fn test_blank_input_is_validation_error() {
        let (_temp_dir, store) = create_store("username,password\nadmin,secret\n");
        let err = store.authenticate("", "secret").unwrap_err();
        assert!(matches!(err, LibraryError::Validation { .. }));
        let err = store.authenticate("admin", "   ").unwrap_err();
        assert!(matches!(err, LibraryError::Validation { .. }));
    }

    #[test]
    fn test_missing_table_is_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("admin_access.csv");
        let store = CredentialStore::new(&path);

        let err = store.authenticate("admin", "secret").unwrap_err();
        assert!(matches!(err, LibraryError::CredentialsUnavailable { .. }));
        assert!(!path.exists());
    }
}
