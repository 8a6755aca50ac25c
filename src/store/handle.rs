//! Store implementation
//!
//! ## Responsibilities
//! - Open/create the database directory and engine file
//! - One short-lived transaction per logical operation
//! - Map engine failures into the crate error taxonomy
//!
//! The handle is opened once per invocation and released by drop on every
//! exit path. There is no pooling and no in-process concurrency.

use std::fs;
use std::path::PathBuf;

use redb::{Database, DatabaseError, ReadableTable, TableDefinition, TableError};

use crate::config::Config;
use crate::error::{KvPathError, Result};

/// Single table holding all stored objects, keyed by path bytes
const OBJECTS: TableDefinition<&[u8], &[u8]> = TableDefinition::new("objects");

/// An open handle onto the embedded store
///
/// ## Lifecycle
/// - `open` creates the directory structure on first use and acquires the
///   engine's lock on the database file. A second open of the same database,
///   from this process or another, fails fast with a storage error rather
///   than blocking.
/// - Drop closes the database, releasing the lock deterministically.
pub struct Store {
    /// The engine-owned database
    db: Database,

    /// Directory the database lives in (kept for error messages)
    data_dir: PathBuf,
}

impl Store {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const DATA_FILENAME: &'static str = "data.redb";

    /// Open or create a store for the configured directory
    ///
    /// An empty configured directory substitutes the process-wide default
    /// path. Any engine open failure, including lock contention, is fatal.
    pub fn open(config: &Config) -> Result<Self> {
        let data_dir = config.effective_data_dir();
        fs::create_dir_all(&data_dir)?;

        let db_path = data_dir.join(Self::DATA_FILENAME);
        tracing::debug!(path = %db_path.display(), "opening store");

        let db = Database::create(&db_path).map_err(|e| match e {
            DatabaseError::DatabaseAlreadyOpen => KvPathError::Storage(format!(
                "database at {} is locked by another handle",
                db_path.display()
            )),
            other => KvPathError::Storage(other.to_string()),
        })?;

        Ok(Self { db, data_dir })
    }

    /// Directory this store was opened on
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Exact-match read inside a read-only transaction
    ///
    /// An absent key is the distinguished `KeyNotFound` error so callers can
    /// branch on it. A database with no data table yet reads as not found.
    pub fn get_exact(&self, key: &[u8]) -> Result<Vec<u8>> {
        let tx = self
            .db
            .begin_read()
            .map_err(|e| KvPathError::Storage(e.to_string()))?;

        match tx.open_table(OBJECTS) {
            Ok(table) => match table
                .get(key)
                .map_err(|e| KvPathError::Resolution(e.to_string()))?
            {
                Some(guard) => Ok(guard.value().to_vec()),
                None => Err(KvPathError::KeyNotFound),
            },
            // No table means nothing was ever written
            Err(TableError::TableDoesNotExist(_)) => Err(KvPathError::KeyNotFound),
            Err(e) => Err(KvPathError::Resolution(e.to_string())),
        }
    }

    /// Collect the values of every key carrying the given prefix
    ///
    /// Opens a read-only transaction, seeks to the first key >= the prefix
    /// and walks forward while the prefix holds. Order is the engine's
    /// native byte ordering. The result may be empty; that is not an error.
    pub fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>> {
        let tx = self
            .db
            .begin_read()
            .map_err(|e| KvPathError::Storage(e.to_string()))?;

        let table = match tx.open_table(OBJECTS) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(KvPathError::Resolution(e.to_string())),
        };

        let range = table
            .range(prefix..)
            .map_err(|e| KvPathError::Resolution(e.to_string()))?;

        let mut values = Vec::new();
        for entry in range {
            let (key, value) = entry.map_err(|e| KvPathError::Resolution(e.to_string()))?;
            if !key.value().starts_with(prefix) {
                break;
            }
            values.push(value.value().to_vec());
        }

        tracing::debug!(matches = values.len(), "prefix scan complete");
        Ok(values)
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Write a value under the exact key inside a read-write transaction
    ///
    /// No prefix semantics on write. The transaction is committed before
    /// return; commit failures are storage errors.
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let tx = self
            .db
            .begin_write()
            .map_err(|e| KvPathError::Storage(e.to_string()))?;

        {
            let mut table = tx
                .open_table(OBJECTS)
                .map_err(|e| KvPathError::Storage(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| KvPathError::Storage(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| KvPathError::Storage(e.to_string()))?;

        tracing::debug!(key_len = key.len(), value_len = value.len(), "put committed");
        Ok(())
    }
}
