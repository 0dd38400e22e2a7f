mod common;
use common::{SAMPLE, event_from, sample_table};
use eventboard::core::derive::{derive_features, parse_event_date};
use eventboard::core::filter::{DateRange, FilterSelection, filter_options};
use eventboard::errors::AppError;
use eventboard::models::event::Event;
use eventboard::models::events::EventTable;
use chrono::NaiveDate;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_derive_weekday_month_year() {
    let table = sample_table();

    let jazz = table.rows[0].derived.as_ref().expect("derived");
    assert_eq!(jazz.month, 1);
    assert_eq!(jazz.year, 2024);
    assert_eq!(jazz.day_of_week, "Monday");
    assert_eq!(jazz.day_of_week_num, 0);

    let market = table.rows[3].derived.as_ref().expect("derived");
    assert_eq!(market.day_of_week, "Saturday");
    assert_eq!(market.day_of_week_num, 5);
    assert_eq!(market.month, 2);
}

#[test]
fn test_derive_sunday_is_six() {
    let mut table = EventTable::new(vec![Event::new(1, "Brunch", "2024-01-07", "")]);
    derive_features(&mut table);
    let parts = table.rows[0].derived.as_ref().unwrap();
    assert_eq!(parts.day_of_week, "Sunday");
    assert_eq!(parts.day_of_week_num, 6);
}

#[test]
fn test_derive_bad_date_degrades_row_only() {
    let mut table = EventTable::new(SAMPLE.iter().map(event_from).collect());
    let issues = derive_features(&mut table);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].id, 5);
    assert_eq!(issues[0].row, 4);
    assert_eq!(issues[0].value, "sometime soon");

    assert!(table.rows[4].derived.is_none());
    assert!(table.rows[..4].iter().all(|e| e.derived.is_some()));
}

#[test]
fn test_derive_is_idempotent() {
    let mut once = sample_table();
    let snapshot = once.clone();
    derive_features(&mut once);
    assert_eq!(once, snapshot);
}

#[test]
fn test_parse_event_date_accepts_timestamps() {
    assert_eq!(parse_event_date("2024-03-05"), Some(d("2024-03-05")));
    assert_eq!(parse_event_date("2024-03-05 18:30:00"), Some(d("2024-03-05")));
    assert_eq!(parse_event_date("2024-03-05T18:30"), Some(d("2024-03-05")));
    assert_eq!(
        parse_event_date("2024-03-05T18:30:00-08:00"),
        Some(d("2024-03-05"))
    );
    assert_eq!(parse_event_date("05/03/2024"), None);
}

#[test]
fn test_all_predicates_unset_is_identity() {
    let table = sample_table();
    let sel = FilterSelection::from_inputs(Some("All"), None, Some("all"), Some("")).unwrap();
    assert!(sel.is_empty());
    assert_eq!(sel.apply(&table), table);
}

#[test]
fn test_date_range_is_inclusive() {
    let mut table = EventTable::new(SAMPLE[..3].iter().map(event_from).collect());
    derive_features(&mut table);

    let sel = FilterSelection::from_inputs(None, Some("2024-01-01:2024-01-31"), None, None).unwrap();
    let out = sel.apply(&table);

    assert_eq!(out.ids(), vec![1, 2]);
}

#[test]
fn test_month_range_shorthand() {
    let table = sample_table();
    let sel = FilterSelection::from_inputs(None, Some("2024-02"), None, None).unwrap();
    assert_eq!(
        sel.date_range,
        Some(DateRange::new(d("2024-02-01"), d("2024-02-29")).unwrap())
    );
    assert_eq!(sel.apply(&table).ids(), vec![3, 4]);
}

#[test]
fn test_degraded_row_excluded_only_by_date_range() {
    let table = sample_table();

    let by_category = FilterSelection::from_inputs(Some("Music"), None, None, None).unwrap();
    assert_eq!(by_category.apply(&table).ids(), vec![1, 3, 5]);

    let with_range =
        FilterSelection::from_inputs(Some("Music"), Some("2024"), None, None).unwrap();
    assert_eq!(with_range.apply(&table).ids(), vec![1, 3]);
}

#[test]
fn test_predicates_are_and_combined_and_stable() {
    let table = sample_table();
    let sel =
        FilterSelection::from_inputs(None, None, Some("Fremont"), Some("Sunny")).unwrap();
    assert_eq!(sel.apply(&table).ids(), vec![4]);

    let weather = FilterSelection::from_inputs(None, None, None, Some("Rain")).unwrap();
    assert_eq!(weather.apply(&table).ids(), vec![1, 3]);
}

#[test]
fn test_filter_is_idempotent() {
    let table = sample_table();
    let sel = FilterSelection::from_inputs(Some("Music"), Some("2024-01:2024-02"), None, Some("Rain"))
        .unwrap();
    let once = sel.apply(&table);
    let twice = sel.apply(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_null_never_matches_concrete_value() {
    let table = sample_table();
    let sel = FilterSelection::from_inputs(None, None, None, Some("Cloudy")).unwrap();
    assert_eq!(sel.apply(&table).ids(), vec![2]);
}

#[test]
fn test_reversed_range_is_rejected() {
    let err = FilterSelection::from_inputs(None, Some("2024-02-01:2024-01-01"), None, None)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));
}

#[test]
fn test_garbage_range_is_rejected() {
    assert!(FilterSelection::from_inputs(None, Some("yesterday"), None, None).is_err());
    assert!(FilterSelection::from_inputs(None, Some("2024-13"), None, None).is_err());
}

#[test]
fn test_filter_options_first_seen_order() {
    let opts = filter_options(&sample_table());
    assert_eq!(opts.categories, vec!["All", "Music", "Literature", "Food"]);
    assert_eq!(
        opts.locations,
        vec!["All", "Capitol Hill", "Fremont", "Downtown"]
    );
    assert_eq!(opts.weather, vec!["All", "Rain", "Cloudy", "Sunny"]);
}
