//! Core data models for the assistant bot
//!
//! This module contains the contact domain: validated field values, the
//! contact record and the address book that owns all records.

pub mod address_book;
pub mod fields;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use fields::{Birthday, Name, Phone, ValidationError, DATE_FORMAT};
pub use record::Record;
