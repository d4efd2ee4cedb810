use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::leave::LeaveStatus;

/// One team member's computed calendar row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRowData {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    pub role: String,
    /// Business days inside both the leave ranges and the visible window.
    pub leave_count: u32,
    /// One `DD/MM/YYYY - DD/MM/YYYY` display string per range, in range order.
    pub date_ranges: Vec<String>,
    /// Every covered day across all ranges; duplicates kept when ranges overlap.
    pub leave_dates: Vec<NaiveDate>,
    /// Per-day status; for overlapping ranges the later range wins.
    pub leave_dates_with_status: BTreeMap<NaiveDate, LeaveStatus>,
    pub date_range: String,
    pub status: String,
}

/// A team with its member rows, members in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamGroup {
    pub team_name: String,
    pub members: Vec<LeaveRowData>,
}
