// --- File: crates/barber_booking/src/format.rs ---
//! Display strings shown by the booking pages.

use chrono::{Datelike, NaiveDate};

use crate::slots::TimeSlot;

pub const APP_TITLE: &str = "ToTa Booking";
pub const SHOP_TAGLINE: &str = "Your Barber's truly (one shop)";
pub const CONFIRMATION_TITLE: &str = "Hooray!!! You are BOOKED!!";
pub const CLOSED_TITLE: &str = "CLOSED ON SUNDAYS";
pub const CLOSED_HINT: &str = "Please select any other day to book your appointment";
pub const DEFAULT_USERNAME: &str = "User";

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Selection card header, e.g. `Monday, 28th of April`.
pub fn selection_header(date: NaiveDate) -> String {
    format!(
        "{}, {}{} of {}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B")
    )
}

/// Long date used on the details and confirmation pages, e.g. `Monday, April 28`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

pub fn confirmation_message(date: NaiveDate, time: TimeSlot) -> String {
    format!("See you at {} on {}", time, long_date(date))
}

pub fn greeting(username: &str) -> String {
    format!("Welcome, {}!", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn header_uses_ordinal_day() {
        assert_eq!(selection_header(d(2025, 4, 28)), "Monday, 28th of April");
        assert_eq!(selection_header(d(2025, 5, 1)), "Thursday, 1st of May");
        assert_eq!(selection_header(d(2025, 5, 2)), "Friday, 2nd of May");
        assert_eq!(selection_header(d(2025, 5, 3)), "Saturday, 3rd of May");
        assert_eq!(selection_header(d(2025, 5, 12)), "Monday, 12th of May");
        assert_eq!(selection_header(d(2025, 5, 22)), "Thursday, 22nd of May");
    }

    #[test]
    fn confirmation_text() {
        let time: TimeSlot = "10:00".parse().unwrap();
        assert_eq!(
            confirmation_message(d(2025, 4, 28), time),
            "See you at 10:00 on Monday, April 28"
        );
        assert_eq!(long_date(d(2025, 4, 4)), "Friday, April 4");
    }

    #[test]
    fn greeting_text() {
        assert_eq!(greeting("jane"), "Welcome, jane!");
    }
}
