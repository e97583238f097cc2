use chrono::NaiveDate;
use addressbook::model::*;
use addressbook::queries::birthday_queries::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with(birthdays: &[(&str, Option<&str>)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in birthdays {
        let mut record = Record::new(name).unwrap();
        if let Some(bd) = birthday {
            record.set_birthday(bd).unwrap();
        }
        book.add_record(record);
    }
    book
}

fn summary(entries: &[UpcomingBirthday]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|e| (e.name.clone(), e.congratulation_date_text()))
        .collect()
}

/// 10.06.2024, a Monday.
fn monday() -> NaiveDate {
    date(2024, 6, 10)
}

// ==========================================================================
// HELPERS
// ==========================================================================

#[test]
fn weekend_shift_moves_to_monday() {
    assert_eq!(weekend_shift(date(2024, 6, 15)), 2); // Saturday
    assert_eq!(weekend_shift(date(2024, 6, 16)), 1); // Sunday
    for day in 10..=14 {
        assert_eq!(weekend_shift(date(2024, 6, day)), 0);
    }
}

#[test]
fn birthday_in_year_keeps_month_and_day() {
    let bd = Birthday::new("12.06.1990").unwrap();
    assert_eq!(birthday_in_year(&bd, 2024), Some(date(2024, 6, 12)));
}

#[test]
fn leap_day_falls_back_to_march_first() {
    let bd = Birthday::new("29.02.2000").unwrap();
    assert_eq!(birthday_in_year(&bd, 2024), Some(date(2024, 2, 29)));
    assert_eq!(birthday_in_year(&bd, 2025), Some(date(2025, 3, 1)));
}

#[test]
fn next_occurrence_rolls_into_next_year() {
    let bd = Birthday::new("09.06.1990").unwrap();
    assert_eq!(next_occurrence(&bd, monday()), Some(date(2025, 6, 9)));

    let bd = Birthday::new("10.06.1990").unwrap();
    assert_eq!(next_occurrence(&bd, monday()), Some(date(2024, 6, 10)));
}

// ==========================================================================
// UPCOMING BIRTHDAYS
// ==========================================================================

#[test]
fn weekday_birthday_is_not_shifted() {
    let book = book_with(&[("Alice", Some("12.06.1990"))]);
    let upcoming = book.upcoming_birthdays(monday());
    assert_eq!(summary(&upcoming), [("Alice".to_string(), "12.06.2024".to_string())]);
}

#[test]
fn saturday_birthday_shifts_two_days() {
    let book = book_with(&[("Bob", Some("15.06.1985"))]);
    let upcoming = book.upcoming_birthdays(monday());
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 17));
}

#[test]
fn sunday_birthday_shifts_one_day() {
    let book = book_with(&[("Carol", Some("16.06.1985"))]);
    let upcoming = book.upcoming_birthdays(monday());
    assert_eq!(upcoming[0].congratulation_date_text(), "17.06.2024");
}

#[test]
fn birthday_seven_days_out_is_excluded() {
    let book = book_with(&[("Dave", Some("17.06.1980")), ("Eve", Some("16.06.1980"))]);
    let upcoming = book.upcoming_birthdays(monday());
    assert_eq!(summary(&upcoming), [("Eve".to_string(), "17.06.2024".to_string())]);
}

#[test]
fn birthday_today_is_included() {
    let book = book_with(&[("Frank", Some("10.06.1975"))]);
    let upcoming = book.upcoming_birthdays(monday());
    assert_eq!(upcoming[0].congratulation_date_text(), "10.06.2024");
}

#[test]
fn birthday_today_on_weekend_is_shifted() {
    let book = book_with(&[("Grace", Some("15.06.1975"))]);
    let upcoming = book.upcoming_birthdays(date(2024, 6, 15));
    assert_eq!(upcoming[0].congratulation_date_text(), "17.06.2024");
}

#[test]
fn passed_birthday_is_excluded() {
    let book = book_with(&[("Heidi", Some("09.06.1990"))]);
    assert!(book.upcoming_birthdays(monday()).is_empty());
}

#[test]
fn contacts_without_birthday_are_skipped() {
    let book = book_with(&[("Ivan", None), ("Judy", Some("11.06.1990"))]);
    let upcoming = book.upcoming_birthdays(monday());
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Judy");
}

#[test]
fn window_wraps_across_new_year() {
    // 28.12.2024 is a Saturday; 02.01.2025 is a Thursday.
    let book = book_with(&[("Ken", Some("02.01.1990")), ("Lena", Some("28.12.1990"))]);
    let upcoming = book.upcoming_birthdays(date(2024, 12, 28));
    assert_eq!(
        summary(&upcoming),
        [
            ("Lena".to_string(), "30.12.2024".to_string()),
            ("Ken".to_string(), "02.01.2025".to_string()),
        ]
    );
}

#[test]
fn leap_day_birthday_in_non_leap_year() {
    // 01.03.2025 is a Saturday, so the greeting moves to Monday 03.03.
    let book = book_with(&[("Mona", Some("29.02.2000"))]);
    let upcoming = book.upcoming_birthdays(date(2025, 2, 26));
    assert_eq!(upcoming[0].congratulation_date_text(), "03.03.2025");
}

#[test]
fn leap_day_birthday_in_leap_year() {
    let book = book_with(&[("Mona", Some("29.02.2000"))]);
    let upcoming = book.upcoming_birthdays(date(2024, 2, 26));
    assert_eq!(upcoming[0].congratulation_date_text(), "29.02.2024");
}

#[test]
fn results_ordered_by_date_then_name() {
    let book = book_with(&[
        ("Zed", Some("15.06.1990")),
        ("Carol", Some("16.06.1990")),
        ("Alice", Some("12.06.1990")),
    ]);
    let upcoming = book.upcoming_birthdays(monday());
    let names: Vec<&str> = upcoming.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Carol", "Zed"]);
}

#[test]
fn upcoming_entry_display() {
    let entry = UpcomingBirthday {
        name: "Alice".into(),
        congratulation_date: date(2024, 6, 12),
    };
    assert_eq!(entry.to_string(), "Name: Alice, Congratulation date: 12.06.2024");
}

#[test]
fn query_function_matches_book_method() {
    let book = book_with(&[("Alice", Some("12.06.1990")), ("Bob", Some("15.06.1985"))]);
    assert_eq!(upcoming_birthdays(&book, monday()), book.upcoming_birthdays(monday()));
}
