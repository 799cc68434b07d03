//! Plain-text contacts format
//!
//! One contact per line:
//!
//! ```text
//! name: phone1;phone2, DD.MM.YYYY
//! ```
//!
//! The birthday field is empty when the contact has none. This format is an
//! import/export path only; the JSON snapshot stays authoritative.
//!
//! Reading is lenient. A line without the `": "` separator is skipped, and a
//! bad phone or birthday inside an otherwise good line is dropped on its own.
//! Every skip produces a warning.

use std::path::Path;

use tracing::warn;

use crate::error::AddressBookError;
use crate::models::{AddressBook, Phone, Record};

use super::file_io::write_text_atomic;

/// Records read from a text file plus the warnings raised along the way
#[derive(Debug, Default)]
pub struct TextImport {
    pub records: Vec<Record>,
    pub warnings: Vec<String>,
}

/// Format one record as a text line (without the trailing newline)
pub fn format_line(record: &Record) -> String {
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    let birthday = record
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_default();
    format!("{}: {}, {}", record.name(), phones.join(";"), birthday)
}

/// Format the whole book, one line per record
pub fn format_book(book: &AddressBook) -> String {
    book.records()
        .map(|record| format_line(record) + "\n")
        .collect()
}

/// Parse a single non-empty line, pushing a warning for anything skipped
pub fn parse_line(line: &str, warnings: &mut Vec<String>) -> Option<Record> {
    let mut skip = |message: String| {
        warn!("{}", message);
        warnings.push(message);
    };

    let Some((name, rest)) = line.split_once(": ") else {
        skip(format!("Skipping invalid line in contacts file: {}", line));
        return None;
    };

    let name = name.trim();
    let mut record = match Record::new(name) {
        Ok(record) => record,
        Err(_) => {
            skip(format!("Skipping invalid line in contacts file: {}", line));
            return None;
        }
    };

    let (phones, birthday) = rest.split_once(',').unwrap_or((rest, ""));

    for phone in phones.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        if record.add_phone(phone).is_err() {
            skip(format!(
                "Skipping invalid phone number \"{}\" for contact {}",
                phone, name
            ));
        }
    }

    let birthday = birthday.trim();
    if !birthday.is_empty() && record.add_birthday(birthday).is_err() {
        skip(format!(
            "Skipping invalid birthday \"{}\" for contact {}",
            birthday, name
        ));
    }

    Some(record)
}

/// Parse a whole text document; blank lines are ignored
pub fn parse_text(contents: &str) -> TextImport {
    let mut import = TextImport::default();
    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(record) = parse_line(line, &mut import.warnings) {
            import.records.push(record);
        }
    }
    import
}

/// Read a text file; a missing file imports nothing
pub fn import_text<P: AsRef<Path>>(path: P) -> Result<TextImport, AddressBookError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(TextImport::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        AddressBookError::Storage(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(parse_text(&contents))
}

/// Write the whole book as text, replacing the file
pub fn export_text<P: AsRef<Path>>(path: P, book: &AddressBook) -> Result<(), AddressBookError> {
    write_text_atomic(path, &format_book(book))
}
