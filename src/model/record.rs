use serde::Serialize;
use std::fmt;

use super::{Birthday, Name, Phone};
use crate::error::BookResult;

/// One contact: a name, its phone numbers in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

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

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone unless the same number is already present.
    /// Returns `false` for a duplicate; format errors propagate.
    pub fn add_phone(&mut self, number: &str) -> BookResult<bool> {
        let phone = Phone::new(number)?;
        if self.phone_index(number).is_some() {
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phone_index(number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces `old` with `new` in place. A missing `old` returns `false`
    /// before `new` is validated.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<bool> {
        let Some(index) = self.phone_index(old) else {
            return Ok(false);
        };
        self.phones[index] = Phone::new(new)?;
        Ok(true)
    }

    /// Returns `number` back if this record holds it, otherwise an empty string.
    pub fn find_phone<'a>(&self, number: &'a str) -> &'a str {
        if self.phone_index(number).is_some() {
            number
        } else {
            ""
        }
    }

    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    fn phone_index(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "not set".to_string());
        write!(
            f,
            "Contact name: {}, phones: {} Birthday: {}",
            self.name, phones, birthday
        )
    }
}
