use std::collections::HashSet;

use chrono::NaiveDate;
use leavecal::models::{Holiday, LeaveStatus};
use leavecal::services::LeaveAggregator;
use pretty_assertions::assert_eq;

mod common;

use common::{date, range, random_talent, talent};

#[test]
fn multi_range_record_becomes_one_row() {
    common::setup_test_env();
    let aggregator = LeaveAggregator::new();
    let record = talent(
        "Sari",
        "Backend",
        vec![
            range(date(2024, 1, 15), date(2024, 1, 17), LeaveStatus::Confirmed),
            range(date(2024, 1, 22), date(2024, 1, 23), LeaveStatus::Draft),
        ],
    );

    let row = aggregator.transform_to_row_data(&record, &HashSet::new(), None);

    assert_eq!(row.leave_count, 5);
    assert_eq!(
        row.date_ranges,
        vec![
            "15/01/2024 - 17/01/2024".to_string(),
            "22/01/2024 - 23/01/2024".to_string(),
        ]
    );
    assert_eq!(row.date_range, "15/01/2024 - 17/01/2024, 22/01/2024 - 23/01/2024");
    assert_eq!(row.status, "Confirmed, Draft");
    assert_eq!(row.leave_dates.len(), 5);
    assert_eq!(
        row.leave_dates_with_status.get(&date(2024, 1, 16)),
        Some(&LeaveStatus::Confirmed)
    );
    assert_eq!(
        row.leave_dates_with_status.get(&date(2024, 1, 22)),
        Some(&LeaveStatus::Draft)
    );
}

#[test]
fn overlapping_ranges_keep_the_later_status() {
    let aggregator = LeaveAggregator::new();
    let record = talent(
        "Bayu",
        "Backend",
        vec![
            range(date(2024, 1, 15), date(2024, 1, 17), LeaveStatus::Draft),
            range(date(2024, 1, 17), date(2024, 1, 18), LeaveStatus::Sick),
        ],
    );

    let row = aggregator.transform_to_row_data(&record, &HashSet::new(), None);

    // The flattened list keeps the duplicate; the status map resolves it.
    assert_eq!(row.leave_dates.len(), 5);
    assert_eq!(
        row.leave_dates_with_status.get(&date(2024, 1, 17)),
        Some(&LeaveStatus::Sick)
    );
    assert_eq!(row.leave_dates_with_status.len(), 4);
    assert_eq!(row.status, "Draft, Sick");
}

#[test]
fn repeated_statuses_are_listed_once() {
    let aggregator = LeaveAggregator::new();
    let record = talent(
        "Dewi",
        "Design",
        vec![
            range(date(2024, 1, 15), date(2024, 1, 15), LeaveStatus::Confirmed),
            range(date(2024, 1, 19), date(2024, 1, 19), LeaveStatus::Confirmed),
        ],
    );

    let row = aggregator.transform_to_row_data(&record, &HashSet::new(), None);
    assert_eq!(row.status, "Confirmed");
}

#[test]
fn visible_window_clips_the_day_count() {
    let aggregator = LeaveAggregator::new();
    let record = talent(
        "Sari",
        "Backend",
        vec![range(
            date(2024, 1, 15),
            date(2024, 1, 19),
            LeaveStatus::Confirmed,
        )],
    );

    let clipped = aggregator.transform_to_row_data(
        &record,
        &HashSet::new(),
        Some((date(2024, 1, 1), date(2024, 1, 16))),
    );
    assert_eq!(clipped.leave_count, 2);
    // Flattened dates are not clipped, only the count is.
    assert_eq!(clipped.leave_dates.len(), 5);

    let disjoint = aggregator.transform_to_row_data(
        &record,
        &HashSet::new(),
        Some((date(2024, 2, 1), date(2024, 2, 29))),
    );
    assert_eq!(disjoint.leave_count, 0);
}

#[test]
fn holidays_reduce_the_count_but_not_the_dates() {
    let aggregator = LeaveAggregator::new();
    let holidays = vec![Holiday {
        date: date(2024, 1, 16),
        name: "Hari Jadi Kota".to_string(),
        is_national: false,
    }];
    let record = talent(
        "Sari",
        "Backend",
        vec![range(
            date(2024, 1, 15),
            date(2024, 1, 17),
            LeaveStatus::Confirmed,
        )],
    );

    let row =
        aggregator.transform_to_row_data(&record, &Holiday::date_set(&holidays), None);

    assert_eq!(row.leave_count, 2);
    assert_eq!(row.leave_dates.len(), 3);
}

#[test]
fn record_without_ranges_yields_an_empty_row() {
    let aggregator = LeaveAggregator::new();
    let record = talent("Putri", "Mobile", vec![]);

    let row = aggregator.transform_to_row_data(&record, &HashSet::new(), None);

    assert_eq!(row.leave_count, 0);
    assert!(row.leave_dates.is_empty());
    assert!(row.leave_dates_with_status.is_empty());
    assert_eq!(row.date_range, "");
    assert_eq!(row.status, "");
}

#[test]
fn grouping_empty_input_yields_no_groups() {
    let aggregator = LeaveAggregator::new();
    assert_eq!(
        aggregator.group_by_team(&[], &HashSet::new(), None),
        vec![]
    );
}

#[test]
fn teams_sort_case_insensitively() {
    let aggregator = LeaveAggregator::new();
    let records = vec![
        random_talent("design", vec![]),
        random_talent("Backend", vec![]),
        random_talent("android", vec![]),
    ];

    let groups = aggregator.group_by_team(&records, &HashSet::new(), None);

    let names: Vec<&str> = groups.iter().map(|g| g.team_name.as_str()).collect();
    assert_eq!(names, vec!["android", "Backend", "design"]);
}

#[test]
fn members_keep_input_order_within_a_team() {
    let aggregator = LeaveAggregator::new();
    let records = vec![
        talent("Sari", "Backend", vec![]),
        talent("Dewi", "Design", vec![]),
        talent("Bayu", "Backend", vec![]),
    ];

    let groups = aggregator.group_by_team(&records, &HashSet::new(), None);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].team_name, "Backend");
    assert_eq!(groups[0].members.len(), 2);
    assert_eq!(groups[0].members[0].name, "Sari");
    assert_eq!(groups[0].members[1].name, "Bayu");
}

#[test]
fn aggregation_is_idempotent() {
    let aggregator = LeaveAggregator::new();
    let records = vec![
        random_talent(
            "Backend",
            vec![range(date(2024, 1, 15), date(2024, 1, 19), LeaveStatus::Draft)],
        ),
        random_talent(
            "Design",
            vec![range(date(2024, 1, 8), date(2024, 1, 9), LeaveStatus::Sick)],
        ),
    ];
    let holidays: HashSet<NaiveDate> = [date(2024, 1, 17)].into_iter().collect();
    let visible = Some((date(2024, 1, 1), date(2024, 1, 31)));

    let first = aggregator.group_by_team(&records, &holidays, visible);
    let second = aggregator.group_by_team(&records, &holidays, visible);

    assert_eq!(first, second);
}

#[test]
fn summary_totals_match_member_rows() {
    let aggregator = LeaveAggregator::new();
    let records = vec![
        talent(
            "Sari",
            "Backend",
            vec![range(date(2024, 1, 15), date(2024, 1, 17), LeaveStatus::Confirmed)],
        ),
        talent(
            "Bayu",
            "Backend",
            vec![range(date(2024, 1, 22), date(2024, 1, 22), LeaveStatus::Draft)],
        ),
        talent("Dewi", "Design", vec![]),
    ];

    let groups = aggregator.group_by_team(&records, &HashSet::new(), None);
    let summary = aggregator.summarize(&groups);

    assert_eq!(summary.total_teams, 2);
    assert_eq!(summary.total_members, 3);
    assert_eq!(summary.total_leave_days, 4);
    assert_eq!(summary.by_status.get("Confirmed"), Some(&1));
    assert_eq!(summary.by_status.get("Draft"), Some(&1));
    assert_eq!(summary.by_status.get("Sick"), None);
}
