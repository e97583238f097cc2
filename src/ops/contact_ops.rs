use crate::error::BookResult;
use crate::model::{AddressBook, Name, Record};

/// What `add_contact` did with the given phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    PhoneAdded,
    DuplicatePhone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneUpdate {
    Updated,
    PhoneNotFound,
    ContactNotFound,
}

/// Adds `phone` to the contact called `name`, creating the contact first
/// when it does not exist. Nothing is stored if either field is invalid.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<AddOutcome> {
    if let Some(record) = book.find_mut(name) {
        return Ok(if record.add_phone(phone)? {
            AddOutcome::PhoneAdded
        } else {
            AddOutcome::DuplicatePhone
        });
    }

    let mut record = Record::with_name(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(AddOutcome::Created)
}

pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old: &str,
    new: &str,
) -> BookResult<PhoneUpdate> {
    let Some(record) = book.find_mut(name) else {
        return Ok(PhoneUpdate::ContactNotFound);
    };
    Ok(if record.edit_phone(old, new)? {
        PhoneUpdate::Updated
    } else {
        PhoneUpdate::PhoneNotFound
    })
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> PhoneUpdate {
    let Some(record) = book.find_mut(name) else {
        return PhoneUpdate::ContactNotFound;
    };
    if record.remove_phone(phone) {
        PhoneUpdate::Updated
    } else {
        PhoneUpdate::PhoneNotFound
    }
}

/// Sets the birthday of an existing contact. Returns `false` if there is
/// no contact called `name`.
pub fn set_birthday(book: &mut AddressBook, name: &str, date: &str) -> BookResult<bool> {
    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(date)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

pub fn remove_contact(book: &mut AddressBook, name: &str) -> bool {
    book.delete(name)
}
