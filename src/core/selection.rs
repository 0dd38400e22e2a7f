//! Checkbox state over the grid and the "Selected" projection.

use crate::core::grid::{Cell, Grid, GridRecord};
use crate::errors::{AppError, AppResult};
use std::collections::BTreeSet;

/// Columns shown for the checked rows.
pub const SELECTED_COLUMNS: [&str; 4] = ["title", "date", "category", "location"];

/// Event ids the user has ticked. Ids outside the current grid are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn new<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Parse a comma separated id list, e.g. `"3,5,12"`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut ids = BTreeSet::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let id: i64 = part
                .parse()
                .map_err(|_| AppError::InvalidSelection(part.to_string()))?;
            ids.insert(id);
        }
        Ok(Self { ids })
    }

    pub fn is_checked(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Checked rows that survive the current filters, in grid order.
    pub fn checked(&self, grid: &Grid) -> Vec<GridRecord> {
        grid.rows
            .iter()
            .filter(|r| self.is_checked(r.id))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedView {
    /// One row per checked record, cells in `SELECTED_COLUMNS` order.
    Table(Vec<Vec<Cell>>),
    /// Nothing checked, or the records lack one of `SELECTED_COLUMNS`.
    Placeholder,
}

/// Project the checked records onto title/date/category/location.
///
/// The column set is the union over all records; if any of the four
/// columns is absent the view is the placeholder, never an error.
pub fn project_selected(records: &[GridRecord]) -> SelectedView {
    let has_all = SELECTED_COLUMNS
        .iter()
        .all(|c| records.iter().any(|r| r.values.contains_key(*c)));

    if !has_all {
        return SelectedView::Placeholder;
    }

    SelectedView::Table(
        records
            .iter()
            .map(|r| {
                SELECTED_COLUMNS
                    .iter()
                    .map(|c| r.get(c).cloned().unwrap_or(Cell::Null))
                    .collect()
            })
            .collect(),
    )
}
