use crate::cli::context::error_message;
use crate::model::AddressBook;
use crate::ops::contact_ops::{self, AddOutcome, PhoneUpdate};

pub const ADD_USAGE: &str = "Usage: add NAME PHONE_NUMBER";
pub const CHANGE_USAGE: &str = "Usage: change NAME OLD_NUMBER NEW_NUMBER";
pub const PHONE_USAGE: &str = "Usage: phone NAME";
pub const DELETE_USAGE: &str = "Usage: delete NAME";
pub const REMOVE_PHONE_USAGE: &str = "Usage: remove-phone NAME PHONE_NUMBER";

pub fn add(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, phone] = args else {
        return ADD_USAGE.into();
    };
    match contact_ops::add_contact(book, name, phone) {
        Ok(AddOutcome::Created) => "New contact added.".into(),
        Ok(AddOutcome::PhoneAdded) => "Phone number added to existing contact.".into(),
        Ok(AddOutcome::DuplicatePhone) => "Phone number already exists.".into(),
        Err(e) => error_message(&e),
    }
}

pub fn change(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, old, new] = args else {
        return CHANGE_USAGE.into();
    };
    match contact_ops::change_phone(book, name, old, new) {
        Ok(PhoneUpdate::Updated) => "Contact updated.".into(),
        Ok(PhoneUpdate::PhoneNotFound) => "Old phone number not found".into(),
        Ok(PhoneUpdate::ContactNotFound) => "Contact does not exist.".into(),
        Err(e) => error_message(&e),
    }
}

pub fn phone(book: &AddressBook, args: &[&str]) -> String {
    let [name] = args else {
        return PHONE_USAGE.into();
    };
    book.find(name)
        .map(|record| record.to_string())
        .unwrap_or_else(|| "Contact not found".into())
}

pub fn all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Contacts not found.".into();
    }
    book.to_string()
}

pub fn delete(book: &mut AddressBook, args: &[&str]) -> String {
    let [name] = args else {
        return DELETE_USAGE.into();
    };
    if contact_ops::remove_contact(book, name) {
        "Contact deleted.".into()
    } else {
        "Contact not found".into()
    }
}

pub fn remove_phone(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, phone] = args else {
        return REMOVE_PHONE_USAGE.into();
    };
    match contact_ops::remove_phone(book, name, phone) {
        PhoneUpdate::Updated => "Phone number removed.".into(),
        PhoneUpdate::PhoneNotFound => "Phone number not found".into(),
        PhoneUpdate::ContactNotFound => "Contact not found".into(),
    }
}
