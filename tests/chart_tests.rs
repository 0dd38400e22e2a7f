mod common;
use common::sample_table;
use eventboard::core::chart::{Bar, ChartAxis, count_by, render_chart};
use eventboard::models::events::EventTable;

fn bar(label: &str, count: usize) -> Bar {
    Bar {
        label: label.to_string(),
        count,
    }
}

#[test]
fn test_count_by_category_first_seen_order() {
    let bars = count_by(&sample_table(), ChartAxis::Category);
    assert_eq!(bars, vec![bar("Music", 3), bar("Literature", 1), bar("Food", 1)]);
}

#[test]
fn test_count_by_location_groups_nulls() {
    let bars = count_by(&sample_table(), ChartAxis::Location);
    assert_eq!(
        bars,
        vec![
            bar("Capitol Hill", 1),
            bar("Fremont", 2),
            bar("Downtown", 1),
            bar("(none)", 1)
        ]
    );
}

#[test]
fn test_count_by_derived_axes_is_chronological() {
    let table = sample_table();

    assert_eq!(
        count_by(&table, ChartAxis::Month),
        vec![bar("01", 2), bar("02", 2), bar("(none)", 1)]
    );
    assert_eq!(
        count_by(&table, ChartAxis::Weekday),
        vec![
            bar("Monday", 2),
            bar("Thursday", 1),
            bar("Saturday", 1),
            bar("(none)", 1)
        ]
    );
}

#[test]
fn test_render_chart_scales_to_largest_bar() {
    let out = render_chart("Events by category", &[bar("Music", 4), bar("Food", 1)]);
    let music = out.lines().find(|l| l.starts_with("Music")).unwrap();
    let food = out.lines().find(|l| l.starts_with("Food ")).unwrap();

    assert_eq!(music.matches('█').count(), 40);
    assert_eq!(food.matches('█').count(), 10);
    assert!(music.ends_with(" 4"));
}

#[test]
fn test_render_empty_chart() {
    let bars = count_by(&EventTable::default(), ChartAxis::Year);
    assert!(bars.is_empty());
    assert!(render_chart("Events by year", &bars).contains("No events to chart"));
}
