use std::path::Path;

use library_core::{Library, LibraryBuilder};
use tempfile::TempDir;

/// Helper function to create a test library
pub fn create_test_library() -> (TempDir, Library) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let library = open_library(temp_dir.path());
    (temp_dir, library)
}

/// Opens (or reopens) a library rooted at `dir`.
pub fn open_library(dir: &Path) -> Library {
    LibraryBuilder::new()
        .with_data_dir(Some(dir.join("tables")))
        .with_credentials_file(Some(dir.join("admin_access.csv")))
        .build()
        .expect("Failed to create library")
}
