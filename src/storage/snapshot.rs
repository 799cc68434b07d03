//! Address book snapshot repository
//!
//! The snapshot is the authoritative persisted state: the whole book is read
//! from addressbook.json at startup and written back on a clean exit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AddressBookError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Serializable snapshot structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

impl Default for SnapshotData {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            contacts: Vec::new(),
        }
    }
}

/// Repository for the address book snapshot
pub struct SnapshotRepository {
    path: PathBuf,
}

impl SnapshotRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the book; a missing snapshot yields an empty book
    pub fn load(&self) -> Result<AddressBook, AddressBookError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot found, starting empty");
        }

        let data: SnapshotData = read_json(&self.path)?;
        if data.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(AddressBookError::Storage(format!(
                "Snapshot schema version {} is newer than supported version {}",
                data.schema_version, SNAPSHOT_SCHEMA_VERSION
            )));
        }

        let book: AddressBook = data.contacts.into_iter().collect();
        info!(contacts = book.len(), path = %self.path.display(), "loaded address book");
        Ok(book)
    }

    /// Overwrite the snapshot with the current book
    pub fn save(&self, book: &AddressBook) -> Result<(), AddressBookError> {
        let data = SnapshotData {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            contacts: book.records().cloned().collect(),
        };
        write_json_atomic(&self.path, &data)?;
        info!(contacts = book.len(), path = %self.path.display(), "saved address book");
        Ok(())
    }
}
