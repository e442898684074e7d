#[cfg(test)]
mod tests {
    use crate::rules::{is_closed, is_slot_available, slot_status, SlotStatus};
    use crate::slots::{TimeSlot, SLOT_COUNT};
    use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
    use proptest::prelude::*;

    // Days from 2024-01-01, seconds into that day.
    fn instant(day: i64, second: i64) -> NaiveDateTime {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (base + Duration::days(day)).and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(second)
    }

    proptest! {
        // Sunday-only assumptions reject ~6/7 of inputs; default budget (1024) is too small.
        #![proptest_config(ProptestConfig { max_global_rejects: 8192, ..ProptestConfig::default() })]

        // Any date before today is unavailable at every time
        #[test]
        fn test_past_dates_unavailable(
            day in 1..2000i64,
            back in 1..400i64,
            second in 0..86_400i64,
            index in 0..SLOT_COUNT,
        ) {
            let now = instant(day, second);
            let date = now.date() - Duration::days(back);
            let time = TimeSlot::at(index).unwrap();
            prop_assert!(!is_slot_available(date, time, now));
        }

        // Any future non-Sunday date is available at every time
        #[test]
        fn test_future_weekdays_available(
            day in 0..2000i64,
            ahead in 1..400i64,
            second in 0..86_400i64,
            index in 0..SLOT_COUNT,
        ) {
            let now = instant(day, second);
            let date = now.date() + Duration::days(ahead);
            prop_assume!(date.weekday() != Weekday::Sun);
            let time = TimeSlot::at(index).unwrap();
            prop_assert!(is_slot_available(date, time, now));
        }

        // Sundays are closed whatever the clock says
        #[test]
        fn test_sundays_closed(
            day in 0..2000i64,
            offset in -400..400i64,
            second in 0..86_400i64,
            index in 0..SLOT_COUNT,
        ) {
            let now = instant(day, second);
            let date = now.date() + Duration::days(offset);
            prop_assume!(is_closed(date));
            let time = TimeSlot::at(index).unwrap();
            prop_assert_eq!(slot_status(date, time, now), SlotStatus::Closed);
        }

        // Same day: a slot is available exactly when it starts at or after now
        #[test]
        fn test_today_matches_instant_comparison(
            day in 0..2000i64,
            second in 0..86_400i64,
            index in 0..SLOT_COUNT,
        ) {
            let now = instant(day, second);
            prop_assume!(!is_closed(now.date()));
            let time = TimeSlot::at(index).unwrap();
            let starts_at = now.date().and_time(time.time());
            prop_assert_eq!(is_slot_available(now.date(), time, now), starts_at >= now);
        }
    }
}
