//! Flat-file table storage for visitors, artifacts and credentials.
//!
//! Each table is a CSV file with a header row. A [`Table`] knows its location
//! and takes its column schema from the [`Record`] type it stores; nothing is
//! kept in process-wide state.
//!
//! Every read goes through [`Table::load`], which first makes sure the file
//! exists with a header (creating it when absent or zero-length). Edits are
//! always full rewrites via [`Table::save`]; only registration appends.
//!
//! There is no locking. A load-modify-save sequence assumes exclusive access
//! to the file for its duration.

use std::{
    fs::{self, OpenOptions},
    io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use log::debug;

use crate::error::{LibraryError, Result, TableResultExt};

pub mod ids;

pub use ids::{next_artifact_code, next_visitor_id};

/// A row type with a fixed column schema.
pub trait Record: Sized {
    /// Human-readable record kind used in messages ("Visitor").
    const KIND: &'static str;

    /// Column names in serialization order.
    const COLUMNS: &'static [&'static str];

    /// Identifier or code that is unique within the table.
    fn key(&self) -> &str;

    /// Builds a record from fields in [`Record::COLUMNS`] order. Missing
    /// columns have already been filled with empty strings.
    fn from_row(row: Vec<String>) -> Self;

    /// Fields in [`Record::COLUMNS`] order.
    fn to_row(&self) -> Vec<&str>;
}

/// A CSV-backed table of records.
#[derive(Debug, Clone)]
pub struct Table<R> {
    path: PathBuf,
    record: PhantomData<fn() -> R>,
}

impl<R: Record> Table<R> {
    /// Creates a table handle. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            record: PhantomData,
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with a header row when it is absent or empty.
    pub fn ensure(&self) -> Result<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() == 0,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(LibraryError::file_system(&self.path, e)),
        };

        if needs_header {
            debug!("Initializing table {}", self.path.display());
            self.write_rows(&[])?;
        }
        Ok(())
    }

    /// Reads every row in file order.
    ///
    /// Columns are matched by header name, so a table whose columns were
    /// reordered still loads; columns absent from the file are filled with
    /// empty strings.
    pub fn load(&self) -> Result<Vec<R>> {
        self.ensure()?;

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .table_context("Failed to open table")?;

        let headers = reader
            .headers()
            .table_context("Failed to read table header")?
            .clone();
        let positions: Vec<Option<usize>> = R::COLUMNS
            .iter()
            .map(|column| headers.iter().position(|header| header == *column))
            .collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.table_context("Failed to read table row")?;
            let fields = positions
                .iter()
                .map(|position| {
                    position
                        .and_then(|i| row.get(i))
                        .unwrap_or_default()
                        .to_string()
                })
                .collect();
            records.push(R::from_row(fields));
        }

        debug!(
            "Loaded {} {} rows from {}",
            records.len(),
            R::KIND,
            self.path.display()
        );
        Ok(records)
    }

    /// Overwrites the table with the header and the given records.
    pub fn save(&self, records: &[R]) -> Result<()> {
        self.write_rows(records)?;
        debug!(
            "Saved {} {} rows to {}",
            records.len(),
            R::KIND,
            self.path.display()
        );
        Ok(())
    }

    /// Appends one record after the existing rows.
    ///
    /// Rows are written in [`Record::COLUMNS`] order, so a table whose header
    /// differs from that order (or lacks columns) is rewritten with the
    /// canonical header first.
    pub fn append(&self, record: &R) -> Result<()> {
        self.ensure()?;
        if !self.has_canonical_header()? {
            debug!("Rewriting {} with canonical header", self.path.display());
            self.save(&self.load()?)?;
        }

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| LibraryError::file_system(&self.path, e))?;
        let mut writer = Self::writer_builder().from_writer(file);
        writer
            .write_record(record.to_row())
            .table_context("Failed to append table row")?;
        writer
            .flush()
            .map_err(|e| LibraryError::file_system(&self.path, e))?;

        debug!("Appended {} '{}'", R::KIND, record.key());
        Ok(())
    }

    fn has_canonical_header(&self) -> Result<bool> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .table_context("Failed to open table")?;
        let headers = reader
            .headers()
            .table_context("Failed to read table header")?;
        Ok(headers.iter().eq(R::COLUMNS.iter().copied()))
    }

    fn write_rows(&self, records: &[R]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| LibraryError::file_system(parent, e))?;
            }
        }

        let mut writer = Self::writer_builder()
            .from_path(&self.path)
            .table_context("Failed to open table for writing")?;
        writer
            .write_record(R::COLUMNS)
            .table_context("Failed to write table header")?;
        for record in records {
            writer
                .write_record(record.to_row())
                .table_context("Failed to write table row")?;
        }
        writer
            .flush()
            .map_err(|e| LibraryError::file_system(&self.path, e))
    }

    fn writer_builder() -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder.terminator(Terminator::CRLF);
        builder
    }
}

#[cfg(test)]
mod tests;
