use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;

use crate::dates;
use crate::models::{
    CellColor, LeaveRecord, LeaveRowData, LeaveStatus, LeaveSummary, TeamGroup,
};

/// The calendar body computation: grouping, range flattening, business-day
/// counting, and cell color resolution.
///
/// Stateless; every operation is a pure function of its inputs, so repeated
/// calls with the same snapshot produce identical output.
#[derive(Debug, Clone, Default)]
pub struct LeaveAggregator;

impl LeaveAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Group records into per-team display rows.
    ///
    /// Teams are sorted case-insensitively by name; within a team, members
    /// keep their input order.
    pub fn group_by_team(
        &self,
        records: &[LeaveRecord],
        holiday_dates: &HashSet<NaiveDate>,
        visible: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<TeamGroup> {
        log::debug!("Grouping {} leave records by team", records.len());

        let mut groups: Vec<TeamGroup> = Vec::new();
        let mut index_by_team: HashMap<String, usize> = HashMap::new();

        for record in records {
            let row = self.transform_to_row_data(record, holiday_dates, visible);
            match index_by_team.get(&record.team) {
                Some(&index) => groups[index].members.push(row),
                None => {
                    index_by_team.insert(record.team.clone(), groups.len());
                    groups.push(TeamGroup {
                        team_name: record.team.clone(),
                        members: vec![row],
                    });
                }
            }
        }

        groups.sort_by_key(|group| group.team_name.to_lowercase());
        groups
    }

    /// Compute one member's row from their record.
    ///
    /// Ranges are processed in record order; when two ranges cover the same
    /// day with different statuses, the later range wins in the per-day map.
    pub fn transform_to_row_data(
        &self,
        record: &LeaveRecord,
        holiday_dates: &HashSet<NaiveDate>,
        visible: Option<(NaiveDate, NaiveDate)>,
    ) -> LeaveRowData {
        let mut date_ranges = Vec::with_capacity(record.leave_dates.len());
        let mut leave_dates: Vec<NaiveDate> = Vec::new();
        let mut leave_dates_with_status: BTreeMap<NaiveDate, LeaveStatus> = BTreeMap::new();
        let mut statuses: Vec<LeaveStatus> = Vec::new();
        let mut leave_count = 0u32;

        for range in &record.leave_dates {
            date_ranges.push(self.format_date_range(range.date_from, range.date_to));
            leave_count +=
                self.clipped_day_count(range.date_from, range.date_to, holiday_dates, visible);

            for day in range
                .date_from
                .iter_days()
                .take_while(|day| *day <= range.date_to)
            {
                leave_dates.push(day);
                if let Some(previous) = leave_dates_with_status.insert(day, range.status.clone()) {
                    if previous != range.status {
                        log::warn!(
                            "Record {} has overlapping ranges on {}: {} overrides {}",
                            record.id,
                            day,
                            range.status,
                            previous
                        );
                    }
                }
            }

            if !statuses.contains(&range.status) {
                statuses.push(range.status.clone());
            }
        }

        let date_range = date_ranges.join(", ");
        let status = statuses
            .iter()
            .map(|status| status.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        LeaveRowData {
            id: record.id,
            name: record.name.clone(),
            team: record.team.clone(),
            role: record.role.clone(),
            leave_count,
            date_ranges,
            leave_dates,
            leave_dates_with_status,
            date_range,
            status,
        }
    }

    /// Inclusive business days in `[from, to]`: not a weekend, not in the
    /// supplied holiday set. An inverted range counts zero.
    pub fn calculate_day_count(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        holiday_dates: &HashSet<NaiveDate>,
    ) -> u32 {
        if from > to {
            return 0;
        }

        from.iter_days()
            .take_while(|day| *day <= to)
            .filter(|day| !dates::is_weekend(*day) && !holiday_dates.contains(day))
            .count() as u32
    }

    fn clipped_day_count(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        holiday_dates: &HashSet<NaiveDate>,
        visible: Option<(NaiveDate, NaiveDate)>,
    ) -> u32 {
        match visible {
            Some((visible_start, visible_end)) => {
                if to < visible_start || from > visible_end {
                    return 0;
                }
                self.calculate_day_count(
                    from.max(visible_start),
                    to.min(visible_end),
                    holiday_dates,
                )
            }
            None => self.calculate_day_count(from, to, holiday_dates),
        }
    }

    pub fn format_date_range(&self, from: NaiveDate, to: NaiveDate) -> String {
        format!(
            "{} - {}",
            dates::format_display(from),
            dates::format_display(to)
        )
    }

    /// Resolve a cell's display color. Fixed priority, first match wins:
    /// national holiday, weekend, regional holiday, leave, empty. A leave
    /// marking never overrides a weekend or holiday.
    pub fn cell_color_class(
        &self,
        is_weekend: bool,
        is_holiday: bool,
        is_national_holiday: bool,
        is_leave_date: bool,
        leave_status: Option<&LeaveStatus>,
    ) -> CellColor {
        if is_national_holiday {
            return CellColor::NationalHoliday;
        }
        if is_weekend {
            return CellColor::Weekend;
        }
        if is_holiday {
            return CellColor::RegionalHoliday;
        }
        if is_leave_date {
            return match leave_status {
                Some(LeaveStatus::Draft) => CellColor::LeaveDraft,
                _ => CellColor::Leave,
            };
        }
        CellColor::Empty
    }

    /// Dashboard counters over already-grouped rows.
    pub fn summarize(&self, groups: &[TeamGroup]) -> LeaveSummary {
        let mut by_status: BTreeMap<String, i64> = BTreeMap::new();
        let mut total_members = 0i64;
        let mut total_leave_days = 0i64;

        for group in groups {
            for member in &group.members {
                total_members += 1;
                total_leave_days += i64::from(member.leave_count);
                for status in member.status.split(", ").filter(|s| !s.is_empty()) {
                    *by_status.entry(status.to_string()).or_insert(0) += 1;
                }
            }
        }

        LeaveSummary {
            total_teams: groups.len() as i64,
            total_members,
            total_leave_days,
            by_status,
        }
    }
}
