//! Data grid over the filtered events: column subset, sorting, checkbox column.

use crate::core::selection::SelectionSet;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::events::EventTable;
use crate::utils::table::Table;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

pub const BASE_COLUMNS: [&str; 8] = [
    "id",
    "title",
    "date",
    "details",
    "category",
    "location",
    "geolocation",
    "weathercondition",
];

pub const DERIVED_COLUMNS: [&str; 4] = ["month", "year", "day_of_week", "day_of_week_num"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Text(String),
    Null,
}

impl Cell {
    fn text(v: &Option<String>) -> Self {
        match v {
            Some(s) => Cell::Text(s.clone()),
            None => Cell::Null,
        }
    }

    /// Numbers numerically, text lexically, nulls after everything.
    fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Null, Cell::Null) => Ordering::Equal,
            (Cell::Null, _) => Ordering::Greater,
            (_, Cell::Null) => Ordering::Less,
            (Cell::Int(a), Cell::Int(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Null => Ok(()),
        }
    }
}

/// One grid row as the selection widget hands it back: column name → value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRecord {
    #[serde(skip)]
    pub id: i64,
    #[serde(flatten)]
    pub values: BTreeMap<String, Cell>,
}

impl GridRecord {
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.values.get(column)
    }
}

fn cell_for(ev: &Event, column: &str) -> Cell {
    let d = ev.derived.as_ref();
    match column {
        "id" => Cell::Int(ev.id),
        "title" => Cell::Text(ev.title.clone()),
        "date" => Cell::Text(ev.date_str()),
        "details" => Cell::Text(ev.details.clone()),
        "category" => Cell::text(&ev.category),
        "location" => Cell::text(&ev.location),
        "geolocation" => Cell::text(&ev.geolocation),
        "weathercondition" => Cell::text(&ev.weathercondition),
        "month" => d.map_or(Cell::Null, |d| Cell::Int(d.month.into())),
        "year" => d.map_or(Cell::Null, |d| Cell::Int(d.year.into())),
        "day_of_week" => d.map_or(Cell::Null, |d| Cell::Text(d.day_of_week.clone())),
        "day_of_week_num" => d.map_or(Cell::Null, |d| Cell::Int(d.day_of_week_num.into())),
        _ => Cell::Null,
    }
}

pub fn is_known_column(column: &str) -> bool {
    BASE_COLUMNS.contains(&column) || DERIVED_COLUMNS.contains(&column)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub columns: Vec<String>,
    pub rows: Vec<GridRecord>,
}

impl Grid {
    /// Build over `columns`, or every base and derived column when `None`.
    pub fn from_events(table: &EventTable, columns: Option<&[String]>) -> AppResult<Self> {
        let columns: Vec<String> = match columns {
            Some(cols) => {
                if let Some(bad) = cols.iter().find(|c| !is_known_column(c)) {
                    return Err(AppError::UnknownColumn(bad.clone()));
                }
                cols.to_vec()
            }
            None => BASE_COLUMNS
                .iter()
                .chain(DERIVED_COLUMNS.iter())
                .map(|c| c.to_string())
                .collect(),
        };

        let rows = table
            .iter()
            .map(|ev| GridRecord {
                id: ev.id,
                values: columns
                    .iter()
                    .map(|c| (c.clone(), cell_for(ev, c)))
                    .collect(),
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stable sort on one visible column. Nulls stay last in both directions.
    pub fn sort_by(&mut self, column: &str, descending: bool) -> AppResult<()> {
        if !self.columns.iter().any(|c| c == column) {
            return Err(AppError::UnknownColumn(column.to_string()));
        }

        self.rows.sort_by(|a, b| {
            let (x, y) = (a.get(column).unwrap_or(&Cell::Null), b.get(column).unwrap_or(&Cell::Null));
            match (x, y) {
                (Cell::Null, _) | (_, Cell::Null) => x.compare(y),
                _ if descending => y.compare(x),
                _ => x.compare(y),
            }
        });
        Ok(())
    }

    /// Text table with a leading checkbox column.
    pub fn render(&self, selection: &SelectionSet) -> String {
        let mut headers = vec!["sel".to_string()];
        headers.extend(self.columns.iter().cloned());

        let mut table = Table::new(headers.as_slice());
        for rec in &self.rows {
            let mut row = vec![if selection.is_checked(rec.id) { "[x]" } else { "[ ]" }.to_string()];
            row.extend(self.columns.iter().map(|c| {
                rec.get(c).map(|v| v.to_string()).unwrap_or_default()
            }));
            table.add_row(row);
        }
        table.render()
    }
}
