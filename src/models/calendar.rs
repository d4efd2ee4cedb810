use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// One day of the display grid. Derived, recomputed per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day_name: String,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub is_national_holiday: bool,
    pub holiday_name: Option<String>,
}

string_enum! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum CellColor {
        NationalHoliday => "cell-national-holiday",
        Weekend => "cell-weekend",
        RegionalHoliday => "cell-regional-holiday",
        LeaveDraft => "cell-leave-draft",
        Leave => "cell-leave",
        Empty => "cell-empty",
    }
}
