use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates;

pub const SPRINT_LENGTH_DAYS: i64 = 14;
pub const SPRINTS_PER_QUARTER: i64 = 6;
pub const SPRINTS_PER_YEAR: i64 = 24;

/// Days from a sprint's Monday start to its closing Friday, one week later.
const SPRINT_SPAN_DAYS: i64 = 11;

/// The known reference sprint the whole cycle is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintAnchor {
    pub reference_date: NaiveDate,
    pub number: u32,
    pub quarter: u32,
    pub year: i32,
}

impl Default for SprintAnchor {
    fn default() -> Self {
        SprintAnchor {
            reference_date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap_or_default(),
            number: 5,
            quarter: 4,
            year: 2025,
        }
    }
}

impl SprintAnchor {
    /// Position of the anchor sprint within its year, counted from zero.
    fn absolute_index(&self) -> i64 {
        (self.quarter as i64 - 1) * SPRINTS_PER_QUARTER + (self.number as i64 - 1)
    }
}

/// Dates grouped under one sprint label, input order preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintDateGroup {
    pub sprint: String,
    pub dates: Vec<NaiveDate>,
}

/// Deterministic mapping from any calendar date to its 2-week sprint.
///
/// Every date maps to exactly one sprint; dates before the anchor produce
/// negative offsets and are just as valid.
#[derive(Debug, Clone, Default)]
pub struct SprintCalendar {
    anchor: SprintAnchor,
}

impl SprintCalendar {
    pub fn new(anchor: SprintAnchor) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> &SprintAnchor {
        &self.anchor
    }

    /// Sprint offset relative to the anchor sprint: 0 for dates inside it,
    /// negative before it.
    pub fn sprint_number(&self, date: NaiveDate) -> i64 {
        (date - self.anchor.reference_date)
            .num_days()
            .div_euclid(SPRINT_LENGTH_DAYS)
    }

    fn absolute_index(&self, date: NaiveDate) -> i64 {
        self.anchor.absolute_index() + self.sprint_number(date)
    }

    /// `"Sprint {n} Q{q} {year}"`, rolling over quarters and years.
    pub fn sprint_name(&self, date: NaiveDate) -> String {
        let index = self.absolute_index(date);
        let year_offset = index.div_euclid(SPRINTS_PER_YEAR);
        let index_in_year = index.rem_euclid(SPRINTS_PER_YEAR);
        let quarter = index_in_year / SPRINTS_PER_QUARTER + 1;
        let number = index_in_year % SPRINTS_PER_QUARTER + 1;

        format!(
            "Sprint {} Q{} {}",
            number,
            quarter,
            self.anchor.year as i64 + year_offset
        )
    }

    /// Monday the date's sprint starts on.
    pub fn sprint_start_date(&self, date: NaiveDate) -> NaiveDate {
        self.anchor.reference_date
            + Duration::days(self.sprint_number(date) * SPRINT_LENGTH_DAYS)
    }

    /// Closing Friday of the date's sprint, the second Friday of the window.
    pub fn sprint_end_date(&self, date: NaiveDate) -> NaiveDate {
        self.sprint_start_date(date) + Duration::days(SPRINT_SPAN_DAYS)
    }

    pub fn sprint_name_with_date_range(&self, date: NaiveDate) -> String {
        format!(
            "{} ({} - {})",
            self.sprint_name(date),
            dates::format_display(self.sprint_start_date(date)),
            dates::format_display(self.sprint_end_date(date))
        )
    }

    /// Partition dates by sprint label, groups ordered by first occurrence.
    pub fn group_dates_by_sprint(&self, dates: &[NaiveDate]) -> Vec<SprintDateGroup> {
        let mut groups: Vec<SprintDateGroup> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for &date in dates {
            let name = self.sprint_name(date);
            match index_by_name.get(&name) {
                Some(&index) => groups[index].dates.push(date),
                None => {
                    index_by_name.insert(name.clone(), groups.len());
                    groups.push(SprintDateGroup {
                        sprint: name,
                        dates: vec![date],
                    });
                }
            }
        }

        groups
    }
}
