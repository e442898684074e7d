// --- File: crates/barber_booking/src/calendar.rs ---
//! Month view for the date picker: Monday-first week rows of day tiles.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::rules::{is_closed, is_date_selectable};

/// Header labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHeader {
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub label: &'static str,
    pub closed: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarTile {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2025-04-28"))]
    pub date: NaiveDate,
    pub day: u32,
    /// Not selectable: before today or a closed day.
    pub disabled: bool,
    pub closed: bool,
    pub today: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub header: Vec<WeekdayHeader>,
    /// Rows of seven cells; `None` pads days outside the month.
    pub weeks: Vec<Vec<Option<CalendarTile>>>,
}

impl CalendarMonth {
    /// Lays out `year`/`month` relative to `today`. `None` for an invalid month.
    pub fn build(year: i32, month: u32, today: NaiveDate) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let lead = first.weekday().num_days_from_monday() as usize;

        let mut cells: Vec<Option<CalendarTile>> = vec![None; lead];
        let mut next = Some(first);
        while let Some(day) = next.filter(|day| day.month() == month) {
            cells.push(Some(CalendarTile {
                date: day,
                day: day.day(),
                disabled: !is_date_selectable(day, today),
                closed: is_closed(day),
                today: day == today,
            }));
            next = day.succ_opt();
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        let weeks = cells.chunks(7).map(<[_]>::to_vec).collect();
        Some(CalendarMonth {
            year,
            month,
            header: header(),
            weeks,
        })
    }

    /// All tiles in date order.
    pub fn tiles(&self) -> impl Iterator<Item = &CalendarTile> {
        self.weeks.iter().flatten().flatten()
    }
}

fn header() -> Vec<WeekdayHeader> {
    WEEKDAY_LABELS
        .into_iter()
        .zip(Weekday::Mon.num_days_from_monday()..)
        .map(|(label, offset)| WeekdayHeader {
            label,
            closed: offset == Weekday::Sun.num_days_from_monday(),
        })
        .collect()
}
