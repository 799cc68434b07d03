//! Contact record model
//!
//! A record holds one contact: a name, an ordered list of distinct phone
//! numbers and an optional birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::{Birthday, Name, Phone, ValidationError};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Unchecked shape of a stored record, validated on the way in
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RecordData> for Record {
    type Error = ValidationError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::with_name(data.name);
        for phone in data.phones {
            record.push_phone(phone)?;
        }
        record.birthday = data.birthday;
        Ok(record)
    }
}

impl Record {
    /// Create an empty record for `name`
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create an empty record from an already validated name
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number
    ///
    /// Duplicates are checked before format, so adding an already present
    /// number reports `DuplicatePhone`.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        if self.find_phone(phone).is_some() {
            return Err(ValidationError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    fn push_phone(&mut self, phone: Phone) -> Result<(), ValidationError> {
        if self.phones.contains(&phone) {
            return Err(ValidationError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace `old` with `new`, keeping its position in the list
    ///
    /// The record is left untouched on any error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ValidationError::PhoneNotFound(old.to_string()))?;

        let replacement = Phone::new(new)?;

        // The replacement must not collide with any other entry
        if self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == replacement)
        {
            return Err(ValidationError::DuplicatePhone(new.to_string()));
        }

        self.phones[index] = replacement;
        Ok(())
    }

    /// Find a phone equal to `phone`
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set or overwrite the birthday from `DD.MM.YYYY`
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, Phones: {}",
            self.name,
            phones.join("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
