//! The tabular sheet primitive underneath every repository.
//!
//! A sheet is one CSV file whose first row is a fixed header used as the
//! schema check: rows are records, the workbook of sheets is the database.
//! The surface is deliberately small — ensure, verify headers, read all
//! rows, append one row — because that is everything the application ever
//! does with its store.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage-boundary failures.
///
/// A schema mismatch is fatal at startup (the health check surfaces it); a
/// lock timeout is reported to the caller, who resubmits manually. Nothing
/// here is retried automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sheet \"{0}\" does not exist")]
    MissingSheet(String),
    #[error("sheet \"{sheet}\" header mismatch: expected [{}], found [{}]", expected.join(", "), found.join(", "))]
    SchemaMismatch {
        sheet: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("timed out waiting for the append lock")]
    LockTimeout,
    #[error("sheet \"{sheet}\" row {row}: {reason}")]
    BadRow { sheet: String, row: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Static description of one sheet: its name, backing file and header row.
pub struct SheetDef {
    pub name: &'static str,
    pub file: &'static str,
    pub headers: &'static [&'static str],
}

/// A handle to one sheet of the workbook.
pub struct Sheet {
    def: &'static SheetDef,
    path: PathBuf,
}

impl Sheet {
    pub fn new(dir: &Path, def: &'static SheetDef) -> Self {
        Sheet {
            path: dir.join(def.file),
            def,
        }
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Creates the sheet with its header row if it does not exist yet.
    /// Returns whether it was created.
    pub fn ensure(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        writer.write_record(self.def.headers)?;
        writer.flush()?;
        Ok(true)
    }

    /// Checks the header row against the expected schema.
    ///
    /// Both a column-count difference and any per-column mismatch fail; the
    /// error carries both header rows so the health check can show them.
    pub fn verify_headers(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Err(StoreError::MissingSheet(self.def.name.to_string()));
        }
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let found: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let expected: Vec<String> = self.def.headers.iter().map(|h| h.to_string()).collect();

        if found != expected {
            return Err(StoreError::SchemaMismatch {
                sheet: self.def.name.to_string(),
                expected,
                found,
            });
        }
        Ok(())
    }

    /// All data rows, header excluded. Reads are never locked and may race
    /// with a concurrent append.
    pub fn read_rows(&self) -> Result<Vec<StringRecord>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::MissingSheet(self.def.name.to_string()));
        }
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?);
        }
        Ok(rows)
    }

    /// Appends one row. Callers serialize appends through the workbook lock.
    pub fn append_row(&self, fields: &[String]) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Err(StoreError::MissingSheet(self.def.name.to_string()));
        }
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(fields)?;
        writer.flush()?;
        Ok(())
    }

    /// Builds a `BadRow` error for the given zero-based data row.
    pub fn bad_row(&self, row: usize, reason: impl Into<String>) -> StoreError {
        StoreError::BadRow {
            sheet: self.def.name.to_string(),
            // Header row plus one-based counting, matching what a person
            // sees when they open the file.
            row: row + 2,
            reason: reason.into(),
        }
    }
}
