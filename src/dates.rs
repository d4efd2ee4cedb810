use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::LeaveCalError;

/// Day names indexed by day-of-week, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

/// Parse a local calendar date from an ISO date or datetime string.
///
/// Datetime strings are truncated at `T`; only the year/month/day parts are
/// read, so a value like `2024-01-15T00:00:00Z` never shifts to an adjacent
/// day through timezone conversion.
pub fn parse_local_date(value: &str) -> Result<NaiveDate, LeaveCalError> {
    let date_part = value.split('T').next().unwrap_or(value).trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| LeaveCalError::InvalidDate(value.to_string()))
}

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Display form used across the dashboard: `DD/MM/YYYY`.
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Serde helper for date fields fed by the upstream repository, which sends
/// either plain dates or full ISO datetimes for the same field.
pub mod local_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_local_date(&raw).map_err(serde::de::Error::custom)
    }
}
