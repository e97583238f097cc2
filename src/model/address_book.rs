use chrono::NaiveDate;
use std::fmt;

use super::{Record, UpcomingBirthday};
use crate::queries::birthday_queries;
use crate::validation::normalize_name;

/// Records keyed by normalized name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record under its name. An existing record with the same
    /// name is replaced in its original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        let key = normalize_name(name);
        self.position(&key).map(|index| &self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let key = normalize_name(name);
        self.position(&key).map(|index| &mut self.records[index])
    }

    pub fn delete(&mut self, name: &str) -> bool {
        let key = normalize_name(name);
        match self.position(&key) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contacts to congratulate between `today` and six days ahead.
    /// See [`birthday_queries::upcoming_birthdays`].
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, today)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == key)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
