//! Builder for creating and configuring Library instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Library;
use crate::{config::LibraryConfig, error::Result};

/// Builder for creating and configuring Library instances.
#[derive(Debug, Clone, Default)]
pub struct LibraryBuilder {
    data_dir: Option<PathBuf>,
    credentials_file: Option<PathBuf>,
}

impl LibraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom directory for the visitors and artifacts tables.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/galactic-library/tables`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom admin credentials table. Defaults to
    /// `admin_access.csv` inside the data directory.
    pub fn with_credentials_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.credentials_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured library, creating the data directory and both
    /// record tables when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::XdgDirectory` if no default directory can be
    /// determined and `LibraryError::FileSystem` or `LibraryError::Table` if
    /// a table cannot be initialized.
    pub fn build(self) -> Result<Library> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => LibraryConfig::default_data_dir()?,
        };

        let mut config = LibraryConfig::new(&data_dir);
        if let Some(credentials) = self.credentials_file {
            config = config.with_credentials_path(credentials);
        }

        let library = Library::new(config);
        library.visitors.ensure()?;
        library.artifacts.ensure()?;

        debug!("Library ready in {}", data_dir.display());
        Ok(library)
    }
}
