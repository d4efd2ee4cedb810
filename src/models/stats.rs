use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LeaveSummary {
    pub total_teams: i64,
    pub total_members: i64,
    pub total_leave_days: i64,
    pub by_status: BTreeMap<String, i64>,
}
