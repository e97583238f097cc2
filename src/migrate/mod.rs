//! JSON export and import of a whole address book.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::BookResult;
use crate::model::{AddressBook, Birthday, Name, Phone, Record};

/// One contact in the JSON layout. Field types validate while deserializing.
#[derive(Debug, Deserialize)]
struct ContactJson {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub contacts: usize,
    pub phones: usize,
    pub birthdays: usize,
}

pub fn to_json(book: &AddressBook) -> BookResult<String> {
    Ok(serde_json::to_string_pretty(&book.iter().collect::<Vec<_>>())?)
}

/// Parses a JSON array of contacts. Later entries with the same name replace
/// earlier ones; repeated phones within a contact are dropped.
pub fn from_json(json: &str) -> BookResult<(AddressBook, ImportStats)> {
    let contacts: Vec<ContactJson> = serde_json::from_str(json)?;

    let mut book = AddressBook::new();
    for contact in contacts {
        let mut record = Record::with_name(contact.name);
        for phone in &contact.phones {
            record.add_phone(phone.as_str())?;
        }
        if let Some(bd) = contact.birthday {
            record.set_birthday(&bd.to_string())?;
        }
        book.add_record(record);
    }

    let stats = ImportStats {
        contacts: book.len(),
        phones: book.iter().map(|r| r.phones().len()).sum(),
        birthdays: book.iter().filter(|r| r.birthday().is_some()).count(),
    };
    Ok((book, stats))
}

pub fn export_json(book: &AddressBook, path: &Path) -> BookResult<()> {
    std::fs::write(path, to_json(book)?)?;
    info!(path = %path.display(), records = book.len(), "address book exported");
    Ok(())
}

pub fn import_json(path: &Path) -> BookResult<(AddressBook, ImportStats)> {
    let json = std::fs::read_to_string(path)?;
    let (book, stats) = from_json(&json)?;
    info!(path = %path.display(), contacts = stats.contacts, "address book imported");
    Ok((book, stats))
}
