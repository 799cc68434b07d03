//! Storage layer for the assistant bot
//!
//! Provides the JSON snapshot of the address book (written atomically) and
//! the plain-text contacts import/export format.

pub mod file_io;
pub mod snapshot;
pub mod text;

pub use snapshot::SnapshotRepository;
pub use text::TextImport;

use std::path::Path;

use crate::config::paths::AppPaths;
use crate::error::AddressBookError;
use crate::models::AddressBook;

/// Main storage coordinator
pub struct Storage {
    paths: AppPaths,
    snapshot: SnapshotRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: AppPaths) -> Result<Self, AddressBookError> {
        paths.ensure_directories()?;

        Ok(Self {
            snapshot: SnapshotRepository::new(paths.snapshot_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Load the address book from the snapshot
    pub fn load_book(&self) -> Result<AddressBook, AddressBookError> {
        self.snapshot.load()
    }

    /// Persist the address book, overwriting the previous snapshot
    pub fn save_book(&self, book: &AddressBook) -> Result<(), AddressBookError> {
        self.snapshot.save(book)
    }

    /// Write the book as plain text
    pub fn export_text(&self, path: &Path, book: &AddressBook) -> Result<(), AddressBookError> {
        text::export_text(path, book)
    }

    /// Read contacts from a plain-text file
    pub fn import_text(&self, path: &Path) -> Result<TextImport, AddressBookError> {
        text::import_text(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().join("bot"));
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("bot").exists());
        assert!(storage.load_book().unwrap().is_empty());
    }

    #[test]
    fn test_text_import_merges_into_book() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(AppPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let text_path = storage.paths().contacts_text_file();
        std::fs::write(&text_path, "jane: 2222222222, \n").unwrap();

        let mut book = AddressBook::new();
        let mut john = Record::new("john").unwrap();
        john.add_phone("1111111111").unwrap();
        book.add_record(john);

        book.extend(storage.import_text(&text_path).unwrap().records);
        storage.save_book(&book).unwrap();

        let loaded = storage.load_book().unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.find("jane").is_some());
    }
}
