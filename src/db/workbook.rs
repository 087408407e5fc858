//! Workbook location and the append lock.
//!
//! The workbook is a directory of sheets, resolved from the configuration
//! override or the platform data dir. The backing store has no row-level
//! transactions, so every append goes through one named process-wide lock
//! with a wait-then-fail acquisition. Reads never take the lock.

use crate::db::sheet::{Sheet, SheetDef, StoreError};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use parking_lot::{Mutex, MutexGuard};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long an append waits for the lock before giving up.
pub const LOCK_WAIT: Duration = Duration::from_secs(30);

static APPEND_LOCK: Mutex<()> = Mutex::new(());

/// Acquires the workbook append lock, failing after [`LOCK_WAIT`].
///
/// A timeout surfaces as [`StoreError::LockTimeout`] and is never retried
/// automatically; the user resubmits.
pub fn append_guard() -> Result<MutexGuard<'static, ()>, StoreError> {
    APPEND_LOCK.try_lock_for(LOCK_WAIT).ok_or(StoreError::LockTimeout)
}

pub struct Workbook {
    dir: PathBuf,
}

impl Workbook {
    /// Opens (creating if needed) the workbook directory.
    pub fn new() -> Result<Workbook, StoreError> {
        let config = Config::read().unwrap_or_default();
        let dir = match config.data_dir {
            Some(dir) => dir,
            None => DataStorage::new().base_path().join("workbook"),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Workbook { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn sheet(&self, def: &'static SheetDef) -> Sheet {
        Sheet::new(&self.dir, def)
    }
}
