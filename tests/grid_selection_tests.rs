mod common;
use common::sample_table;
use eventboard::core::filter::FilterSelection;
use eventboard::core::grid::{Cell, Grid};
use eventboard::core::selection::{SelectedView, SelectionSet, project_selected};
use eventboard::errors::AppError;
use eventboard::models::event::Event;
use eventboard::models::events::EventTable;

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn grid_ids(grid: &Grid) -> Vec<i64> {
    grid.rows.iter().map(|r| r.id).collect()
}

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

#[test]
fn test_grid_defaults_to_all_columns() {
    let grid = Grid::from_events(&sample_table(), None).unwrap();
    assert_eq!(grid.columns.len(), 12);
    assert_eq!(grid.columns[0], "id");
    assert_eq!(grid.columns[11], "day_of_week_num");
    assert_eq!(grid.len(), 5);

    // degraded row: derived cells are empty, date keeps the raw text
    let gig = &grid.rows[4];
    assert_eq!(gig.get("month"), Some(&Cell::Null));
    assert_eq!(gig.get("date"), Some(&text("sometime soon")));
}

#[test]
fn test_grid_column_subset() {
    let grid = Grid::from_events(&sample_table(), Some(cols(&["title", "year"]).as_slice())).unwrap();
    assert_eq!(grid.columns, vec!["title", "year"]);
    assert_eq!(grid.rows[0].get("year"), Some(&Cell::Int(2024)));
    assert!(grid.rows[0].get("location").is_none());
}

#[test]
fn test_grid_unknown_column_is_rejected() {
    let err = Grid::from_events(&sample_table(), Some(cols(&["title", "nope"]).as_slice())).unwrap_err();
    assert!(matches!(err, AppError::UnknownColumn(c) if c == "nope"));
}

#[test]
fn test_sort_keeps_nulls_last_both_ways() {
    let mut grid = Grid::from_events(&sample_table(), None).unwrap();

    grid.sort_by("weathercondition", false).unwrap();
    assert_eq!(grid_ids(&grid), vec![2, 1, 3, 4, 5]);

    grid.sort_by("weathercondition", true).unwrap();
    assert_eq!(grid_ids(&grid), vec![4, 1, 3, 2, 5]);

    grid.sort_by("month", true).unwrap();
    assert_eq!(grid_ids(&grid), vec![4, 3, 1, 2, 5]);
}

#[test]
fn test_sort_on_hidden_column_fails() {
    let mut grid = Grid::from_events(&sample_table(), Some(cols(&["title"]).as_slice())).unwrap();
    assert!(matches!(
        grid.sort_by("date", false),
        Err(AppError::UnknownColumn(_))
    ));
}

#[test]
fn test_render_marks_checked_rows() {
    let grid = Grid::from_events(&sample_table(), Some(cols(&["id", "title"]).as_slice())).unwrap();
    let out = grid.render(&SelectionSet::new([2]));

    assert!(out.contains("sel"));
    assert_eq!(out.matches("[x]").count(), 1);
    assert_eq!(out.matches("[ ]").count(), 4);
    let checked_line = out.lines().find(|l| l.contains("[x]")).unwrap();
    assert!(checked_line.contains("Book Fair"));
}

#[test]
fn test_selection_parse() {
    let sel = SelectionSet::parse(" 3, 1,,3 ").unwrap();
    assert!(sel.is_checked(1));
    assert!(sel.is_checked(3));
    assert!(!sel.is_checked(2));

    assert!(SelectionSet::parse("").unwrap().is_empty());
    assert!(matches!(
        SelectionSet::parse("1,two"),
        Err(AppError::InvalidSelection(p)) if p == "two"
    ));
}

#[test]
fn test_selection_only_sees_filtered_rows() {
    let filters = FilterSelection::from_inputs(Some("Music"), None, None, None).unwrap();
    let filtered = filters.apply(&sample_table());
    let grid = Grid::from_events(&filtered, None).unwrap();

    let checked = SelectionSet::parse("2,5,99").unwrap().checked(&grid);
    assert_eq!(checked.len(), 1);
    assert_eq!(checked[0].id, 5);

    assert_eq!(
        project_selected(&checked),
        SelectedView::Table(vec![vec![
            text("Mystery Gig"),
            text("sometime soon"),
            text("Music"),
            Cell::Null,
        ]])
    );
}

#[test]
fn test_projection_keeps_grid_order() {
    let table = EventTable::new(vec![
        Event::new(10, "Opening", "2024-06-01", "")
            .with_category("Art")
            .with_location("Belltown")
            .with_weather("Sunny"),
        Event::new(11, "Closing", "2024-06-30", "")
            .with_category("Art")
            .with_location("Belltown"),
    ]);
    let grid = Grid::from_events(&table, None).unwrap();
    let view = project_selected(&SelectionSet::new([11, 10]).checked(&grid));

    let SelectedView::Table(rows) = view else {
        panic!("expected a table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], text("Opening"));
    assert_eq!(rows[1], vec![text("Closing"), text("2024-06-30"), text("Art"), text("Belltown")]);
}

#[test]
fn test_nothing_checked_shows_placeholder() {
    let grid = Grid::from_events(&sample_table(), None).unwrap();
    let checked = SelectionSet::default().checked(&grid);
    assert_eq!(project_selected(&checked), SelectedView::Placeholder);
}

#[test]
fn test_missing_projection_column_shows_placeholder() {
    let grid =
        Grid::from_events(&sample_table(), Some(cols(&["title", "date", "category"]).as_slice())).unwrap();
    let checked = SelectionSet::new([1, 2]).checked(&grid);
    assert_eq!(checked.len(), 2);
    assert_eq!(project_selected(&checked), SelectedView::Placeholder);
}
