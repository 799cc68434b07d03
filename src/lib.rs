//! Assistant Bot - interactive command-line address book
//!
//! This library provides the core functionality for the assistant bot: it
//! stores contact names, phone numbers and birthdays, and reports which
//! contacts have a birthday in the coming week.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Validated fields, contact records and the address book
//! - `storage`: JSON snapshot and plain-text import/export
//! - `display`: Output formatting and the view abstraction
//! - `cli`: Command parsing, handlers and the interactive session
//!
//! # Example
//!
//! ```rust
//! use assistant_bot::models::{AddressBook, Record};
//!
//! let mut record = Record::new("john").unwrap();
//! record.add_phone("0123456789").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//! assert!(book.find("john").is_some());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{AddressBookError, AddressBookResult};
