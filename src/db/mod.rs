//! Storage layer for the manabi application.
//!
//! The backing store is a workbook of header-checked sheets (rows are
//! records, sheets are tables), one repository module per sheet. The sheet
//! primitive itself is deliberately dumb: full-scan reads, lock-serialized
//! appends, no updates, no deletes.

/// Workbook directory resolution and the process-wide append lock.
pub mod workbook;

/// The tabular sheet primitive and the storage error taxonomy.
pub mod sheet;

/// Registered accounts; read-only from the application.
pub mod users;

/// The append-only learning log.
pub mod activities;

/// Raw deployment settings rows.
pub mod settings;

/// The "what did you work on" pick list.
pub mod activity_items;
