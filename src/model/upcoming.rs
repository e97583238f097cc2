use chrono::NaiveDate;
use std::fmt;

use super::birthday::DATE_FORMAT;

/// A contact whose birthday falls within the upcoming window, paired with
/// the weekday on which to congratulate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn congratulation_date_text(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Congratulation date: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}
