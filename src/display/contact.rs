//! Contact display formatting
//!
//! Formats records and birthday reminders for terminal output.

use crate::models::{Record, UpcomingBirthday};

/// Message shown by `all` on an empty book
pub const NO_CONTACTS: &str = "No contacts found.";

/// Message shown by `birthdays` when nothing is coming up
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays.";

/// Format a list of contacts, one rendering per line
pub fn format_contact_list(contacts: &[&Record]) -> String {
    if contacts.is_empty() {
        return NO_CONTACTS.to_string();
    }

    contacts
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format upcoming birthdays as `name: DD.MM.YYYY` lines
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }

    upcoming
        .iter()
        .map(UpcomingBirthday::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_contact_list() {
        assert_eq!(format_contact_list(&[]), "No contacts found.");
    }

    #[test]
    fn test_contact_list() {
        let mut john = Record::new("john").unwrap();
        john.add_phone("1111111111").unwrap();
        let mut jane = Record::new("jane").unwrap();
        jane.add_phone("2222222222").unwrap();

        assert_eq!(
            format_contact_list(&[&john, &jane]),
            "Contact name: john, Phones: 1111111111\nContact name: jane, Phones: 2222222222"
        );
    }

    #[test]
    fn test_upcoming_birthdays() {
        assert_eq!(format_upcoming_birthdays(&[]), "No upcoming birthdays.");

        let upcoming = vec![
            UpcomingBirthday {
                name: "john".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            },
            UpcomingBirthday {
                name: "jane".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            },
        ];
        assert_eq!(
            format_upcoming_birthdays(&upcoming),
            "john: 12.03.2024\njane: 18.03.2024"
        );
    }
}
