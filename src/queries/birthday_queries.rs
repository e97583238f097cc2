use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::{AddressBook, Birthday, UpcomingBirthday};

/// Birthdays from today up to, but not including, this many days ahead.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// The birthday's month and day placed in `year`. Feb 29 falls back to
/// Mar 1 when `year` is not a leap year.
pub fn birthday_in_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    let date = birthday.date();
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The next time the birthday comes around, counting today.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday_in_year(birthday, today.year())?;
    if this_year < today {
        birthday_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Days to add so a greeting lands on a working day.
pub fn weekend_shift(date: NaiveDate) -> i64 {
    match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    }
}

/// Contacts whose next birthday is within [`UPCOMING_WINDOW_DAYS`] of `today`,
/// with weekend birthdays moved to the following Monday.
///
/// Results are ordered by congratulation date, then by name.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<UpcomingBirthday> {
    let mut results: Vec<UpcomingBirthday> = book
        .iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let next = next_occurrence(birthday, today)?;
            let days_until = (next - today).num_days();
            if !(0..UPCOMING_WINDOW_DAYS).contains(&days_until) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: next + Duration::days(weekend_shift(next)),
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });

    results
}
