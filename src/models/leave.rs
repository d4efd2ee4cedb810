use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// One talent's leave entry as delivered by the upstream repository.
///
/// A record may carry zero ranges (a talent on the roster with no scheduled
/// leave), and ranges may be non-contiguous with independent statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    pub role: String,
    #[serde(rename = "leaveDate", default)]
    pub leave_dates: Vec<LeaveDateRange>,
}

/// One contiguous `[date_from, date_to]` interval with a single status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDateRange {
    #[serde(with = "crate::dates::local_date")]
    pub date_from: NaiveDate,
    #[serde(with = "crate::dates::local_date")]
    pub date_to: NaiveDate,
    pub status: LeaveStatus,
}

string_enum! {
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub enum LeaveStatus {
        Draft => "Draft",
        Confirmed => "Confirmed",
        Sick => "Sick",
    }
}
