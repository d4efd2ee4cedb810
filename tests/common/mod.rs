use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::Name;
use uuid::Uuid;

use leavecal::models::{LeaveDateRange, LeaveRecord, LeaveStatus};

#[allow(dead_code)]
pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[allow(dead_code)]
pub fn range(from: NaiveDate, to: NaiveDate, status: LeaveStatus) -> LeaveDateRange {
    LeaveDateRange {
        date_from: from,
        date_to: to,
        status,
    }
}

#[allow(dead_code)]
pub fn talent(name: &str, team: &str, ranges: Vec<LeaveDateRange>) -> LeaveRecord {
    LeaveRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        team: team.to_string(),
        role: "Engineer".to_string(),
        leave_dates: ranges,
    }
}

/// Roster entry with a generated name, for tests that only care about shape.
#[allow(dead_code)]
pub fn random_talent(team: &str, ranges: Vec<LeaveDateRange>) -> LeaveRecord {
    let name: String = Name().fake();
    talent(&name, team, ranges)
}
