use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday, pre-normalized upstream to a plain calendar date.
///
/// National holidays take full display priority; regional ones only lower
/// cell priority and business-day counting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub is_national: bool,
}

impl Holiday {
    /// Flat date set used for business-day exclusion, national or not.
    pub fn date_set(holidays: &[Holiday]) -> HashSet<NaiveDate> {
        holidays.iter().map(|holiday| holiday.date).collect()
    }
}
