//! Address book model
//!
//! The book owns its records in insertion order, keyed by name, and answers
//! the upcoming-birthdays query.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::fmt;

use super::fields::{Birthday, DATE_FORMAT};
use super::record::Record;
use crate::error::{AddressBookError, AddressBookResult};

/// Default length of the upcoming-birthdays window, in days
pub const DEFAULT_WINDOW_DAYS: u64 = 7;

/// A contact whose (weekend-shifted) birthday falls inside the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Date to congratulate on, already moved off the weekend
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// Collection of contacts keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert a record, replacing any record with the same name in place
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Find a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Find a record by exact name for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record for `name`
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| AddressBookError::contact_not_found(name))?;
        Ok(self.records.remove(index))
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays in the coming week, relative to the local date
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays whose next congratulation date lies in
    /// `[today, today + window_days]`
    ///
    /// A birthday that already passed this year counts for next year.
    /// Saturdays and Sundays are moved to the following Monday before the
    /// window check.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u64,
    ) -> Vec<UpcomingBirthday> {
        let Some(last_day) = today.checked_add_days(Days::new(window_days)) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = next_occurrence(birthday, today).and_then(shift_off_weekend)?;
                (date >= today && date <= last_day).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect()
    }
}

/// Next anniversary of `birthday` on or after `today`
fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday.date(), today.year())?;
    if this_year < today {
        anniversary_in(birthday.date(), today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Anniversary in `year`; 29 February falls on 1 March in common years
fn anniversary_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn shift_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn contact(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone("0123456789").unwrap();
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(contact("john", None));

        assert_eq!(book.len(), 1);
        assert!(book.find("john").is_some());
        assert!(book.find("John").is_none());
        assert!(book.find("jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(contact("john", None));
        book.add_record(contact("jane", None));
        book.add_record(contact("john", Some("01.01.1990")));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["john", "jane"]);
        assert!(book.find("john").unwrap().birthday().is_some());
    }

    #[test]
    fn test_find_mut() {
        let mut book = AddressBook::new();
        book.add_record(contact("john", None));

        book.find_mut("john").unwrap().add_phone("2222222222").unwrap();
        assert_eq!(book.find("john").unwrap().phones().len(), 2);
        assert!(book.find_mut("jane").is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(contact("john", None));

        let removed = book.delete("john").unwrap();
        assert_eq!(removed.name().as_str(), "john");
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        book.add_record(contact("john", None));
        let before = book.clone();

        let err = book.delete("jane").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(book, before);
    }

    #[test]
    fn test_display() {
        let mut book = AddressBook::new();
        assert_eq!(book.to_string(), "");

        book.add_record(contact("john", None));
        book.add_record(contact("jane", Some("05.06.1990")));
        assert_eq!(
            book.to_string(),
            "Contact name: john, Phones: 0123456789\n\
             Contact name: jane, Phones: 0123456789, Birthday: 05.06.1990"
        );
    }

    #[test]
    fn test_upcoming_weekday_birthday() {
        // 10.03.2024 is a Sunday
        let today = date(10, 3, 2024);
        let book: AddressBook = vec![contact("john", Some("12.03.1990"))].into_iter().collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "john");
        assert_eq!(upcoming[0].formatted_date(), "12.03.2024");
    }

    #[test]
    fn test_upcoming_saturday_moves_to_monday() {
        let today = date(10, 3, 2024);
        let book: AddressBook = vec![contact("jane", Some("16.03.1985"))].into_iter().collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "18.03.2024");
    }

    #[test]
    fn test_upcoming_sunday_moves_to_monday() {
        let today = date(10, 3, 2024);
        let book: AddressBook = vec![contact("bob", Some("17.03.2000"))].into_iter().collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "18.03.2024");
    }

    #[test]
    fn test_upcoming_today_is_included() {
        // Today itself is a Sunday, so the congratulation moves to Monday
        let today = date(10, 3, 2024);
        let book: AddressBook = vec![contact("ann", Some("10.03.1970"))].into_iter().collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming[0].formatted_date(), "11.03.2024");

        // Wednesday birthday on a Wednesday
        let today = date(13, 3, 2024);
        let book: AddressBook = vec![contact("ann", Some("13.03.1970"))].into_iter().collect();
        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming[0].formatted_date(), "13.03.2024");
    }

    #[test]
    fn test_upcoming_window_bounds() {
        // Wednesday 13.03.2024; the window ends Wednesday 20.03.2024
        let today = date(13, 3, 2024);
        let book: AddressBook = vec![
            contact("last", Some("20.03.1990")),
            contact("past", Some("12.03.1990")),
            contact("late", Some("21.03.1990")),
            contact("none", None),
        ]
        .into_iter()
        .collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["last"]);
    }

    #[test]
    fn test_upcoming_weekend_shift_can_leave_window() {
        // Friday 15.03.2024; the window ends Friday 22.03.2024 and Saturday
        // 23.03 shifts to Monday 25.03, outside it
        let today = date(15, 3, 2024);
        let book: AddressBook = vec![contact("john", Some("23.03.1990"))].into_iter().collect();
        assert!(book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS).is_empty());
    }

    #[test]
    fn test_upcoming_wraps_to_next_year() {
        // Monday 30.12.2024; 02.01.2025 is a Thursday
        let today = date(30, 12, 2024);
        let book: AddressBook = vec![contact("john", Some("02.01.1990"))].into_iter().collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming[0].formatted_date(), "02.01.2025");
    }

    #[test]
    fn test_upcoming_leap_day_in_common_year() {
        // Tuesday 25.02.2025; 29.02 falls on Saturday 01.03.2025 -> Monday 03.03
        let today = date(25, 2, 2025);
        let book: AddressBook = vec![contact("leap", Some("29.02.2000"))].into_iter().collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming[0].formatted_date(), "03.03.2025");
    }

    #[test]
    fn test_upcoming_keeps_book_order() {
        let today = date(11, 3, 2024);
        let book: AddressBook = vec![
            contact("zed", Some("14.03.1990")),
            contact("amy", Some("12.03.1990")),
        ]
        .into_iter()
        .collect();

        let upcoming = book.upcoming_birthdays_from(today, DEFAULT_WINDOW_DAYS);
        let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy"]);
        assert_eq!(upcoming[1].to_string(), "amy: 12.03.2024");
    }

    #[test]
    fn test_upcoming_empty_book() {
        assert!(AddressBook::new()
            .upcoming_birthdays_from(date(10, 3, 2024), DEFAULT_WINDOW_DAYS)
            .is_empty());
    }
}
