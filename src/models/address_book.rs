//! The address book: records keyed by name, plus birthday scheduling.

use crate::domain::format_date;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

/// Window used by `get_upcoming_birthdays` when no other is configured.
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// One entry of the upcoming-birthdays report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Congratulation date as `DD.MM.YYYY`, moved off weekends
    pub birthday: String,
}

/// All contacts, keyed by name.
///
/// Iteration follows insertion order. Replacing a record keeps the slot of
/// the record it replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Store a record under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key, record).is_some() {
            debug!("Replaced existing record");
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Contacts to congratulate within the next `days` days, counting from
    /// today's local date.
    pub fn get_upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Contacts to congratulate within `days` days of `today`.
    ///
    /// A birthday already past this year counts for next year. Both ends of
    /// the window are inclusive. A birthday on a weekend is congratulated on
    /// the following Monday. Results follow the book's insertion order.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(candidate) = next_occurrence(birthday.date(), today) else {
                warn!("Cannot place birthday of {} on the calendar", record.name());
                continue;
            };

            let offset = (candidate - today).num_days();
            if (0..=days).contains(&offset) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: format_date(adjust_for_weekend(candidate)),
                });
            }
        }

        debug!("{} upcoming birthdays within {} days", upcoming.len(), days);
        upcoming
    }
}

/// The birthday's month and day in `year`.
///
/// February 29 falls on March 1 in common years.
fn occurrence_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// First occurrence of the birthday on or after `today`.
fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birth, today.year())?;
    if this_year < today {
        return occurrence_in(birth, today.year() + 1);
    }
    Some(this_year)
}

/// The next `weekday` strictly after `start`.
fn find_next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(start.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    start + Duration::days(days_ahead)
}

/// Move Saturday and Sunday to the following Monday.
fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => find_next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

// Serde support - a book is a list of records; keys are rebuilt from names
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressBook:")?;
        for record in self.records.values() {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}
