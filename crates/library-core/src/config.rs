//! Table locations.

use std::path::{Path, PathBuf};

use crate::error::{LibraryError, Result};

/// Prefix used for the XDG data directory.
pub const APP_PREFIX: &str = "galactic-library";
/// File name of the visitors table.
pub const VISITORS_FILE: &str = "visitors.csv";
/// File name of the artifacts table.
pub const ARTIFACTS_FILE: &str = "artifacts.csv";
/// File name of the admin credentials table.
pub const CREDENTIALS_FILE: &str = "admin_access.csv";

/// Where the library keeps its tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Directory holding the visitors and artifacts tables
    pub data_dir: PathBuf,
    /// Admin credentials table
    pub credentials_path: PathBuf,
}

impl LibraryConfig {
    /// Configuration with every table inside `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            credentials_path: data_dir.join(CREDENTIALS_FILE),
            data_dir,
        }
    }

    /// Overrides the credentials table location.
    pub fn with_credentials_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.credentials_path = path.as_ref().to_path_buf();
        self
    }

    pub fn visitors_path(&self) -> PathBuf {
        self.data_dir.join(VISITORS_FILE)
    }

    pub fn artifacts_path(&self) -> PathBuf {
        self.data_dir.join(ARTIFACTS_FILE)
    }

    /// Returns the default data directory following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/galactic-library/tables`.
    pub fn default_data_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .create_data_directory("tables")
            .map_err(|e| LibraryError::XdgDirectory(e.to_string()))
    }
}
