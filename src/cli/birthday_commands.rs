use chrono::NaiveDate;

use crate::cli::context::error_message;
use crate::model::AddressBook;
use crate::ops::contact_ops;

pub const ADD_BIRTHDAY_USAGE: &str = "Usage: add-birthday NAME DATE(DD.MM.YYYY)";
pub const SHOW_BIRTHDAY_USAGE: &str = "Usage: show-birthday NAME";

pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> String {
    let [name, date] = args else {
        return ADD_BIRTHDAY_USAGE.into();
    };
    match contact_ops::set_birthday(book, name, date) {
        Ok(true) => "Added".into(),
        Ok(false) => "Contact not found".into(),
        Err(e) => error_message(&e),
    }
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> String {
    let [name] = args else {
        return SHOW_BIRTHDAY_USAGE.into();
    };
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(bd) => format!("Birthday: {}", bd),
            None => "Birthday not set".into(),
        },
        None => "Contact not found".into(),
    }
}

pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "Birthdays not found".into();
    }
    upcoming
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
