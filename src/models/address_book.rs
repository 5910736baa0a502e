//! AddressBook model: the in-memory store of all records, keyed by name.

use super::record::Record;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of the upcoming-birthdays window in days, today included.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// A birthday falling inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The birthday re-anchored to the current year
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// A collection of records with unique names.
///
/// Records are kept in insertion order, which is the order used for display
/// and for [`AddressBook::upcoming_birthdays`]. Replacing an existing record
/// keeps its position.
///
/// Lookups by name scan the list. An interactive book holds a handful of
/// contacts, and a plain `Vec` keeps insertion order without an extra map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// The record named `name`, if present.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable access to the record named `name`, if present.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record named `name`, returning it. No-op when absent.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|index| self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays within the next seven days, starting today (local time).
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays whose occurrence in `today`'s year lies in
    /// `today ..= today + 6 days`, in book order.
    ///
    /// The occurrence is always taken in `today`'s year, so a birthday early
    /// in January is not reported when checked in late December.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let end = today
            .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS - 1))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.show_birthday()?;
                let date = birthday.occurrence_in(today.year());
                (today <= date && date <= end).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// Serde support - serialize as a list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

// Serde support - duplicate names resolve last-wins
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
