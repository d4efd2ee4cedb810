use chrono::{Datelike, NaiveDate};

use crate::dates;
use crate::models::{CalendarCell, Holiday};

/// Implicit 2-calendar-month display window: the start month's day 1 through
/// the last day of the following month.
fn implicit_window(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(start.year(), start.month(), 1).unwrap_or(start);

    let (year, month) = if start.month() >= 11 {
        (start.year() + 1, start.month() - 10)
    } else {
        (start.year(), start.month() + 2)
    };
    let last = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|day_one| day_one.pred_opt())
        .unwrap_or(start);

    (first, last)
}

/// Produce one `CalendarCell` per day, inclusive of both endpoints.
///
/// Holiday flags start out unset; [`apply_holidays`] merges them in as a
/// separate step. An inverted window yields an empty grid, never an error.
pub fn generate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Vec<CalendarCell> {
    let (first, last) = match end {
        Some(end) => (start, end),
        None => implicit_window(start),
    };

    if first > last {
        return Vec::new();
    }

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|date| CalendarCell {
            date,
            day_name: dates::day_name(date).to_string(),
            is_weekend: dates::is_weekend(date),
            is_holiday: false,
            is_national_holiday: false,
            holiday_name: None,
        })
        .collect()
}

/// Merge the caller-supplied holiday list into an existing grid, matching by
/// exact date equality.
pub fn apply_holidays(cells: &mut [CalendarCell], holidays: &[Holiday]) {
    for cell in cells.iter_mut() {
        if let Some(holiday) = holidays.iter().find(|holiday| holiday.date == cell.date) {
            cell.is_holiday = true;
            cell.is_national_holiday = holiday.is_national;
            cell.holiday_name = Some(holiday.name.clone());
        }
    }
}
