//! Filter engine: four optional predicates, AND-combined, stable.

use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::events::EventTable;
use crate::utils::date::parse_range;
use chrono::NaiveDate;
use serde::Serialize;

/// Selector value meaning "no filter".
pub const ALL: &str = "All";

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub category: Option<String>,
    pub date_range: Option<DateRange>,
    pub location: Option<String>,
    pub weather: Option<String>,
}

/// `None`, blank and `All` (any case) all mean "unselected".
fn selected(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
        .map(str::to_string)
}

impl FilterSelection {
    /// Build from raw selector values as typed by the user.
    pub fn from_inputs(
        category: Option<&str>,
        range: Option<&str>,
        location: Option<&str>,
        weather: Option<&str>,
    ) -> AppResult<Self> {
        let date_range = match selected(range) {
            Some(r) => {
                let (start, end) = parse_range(&r)?;
                Some(DateRange::new(start, end)?)
            }
            None => None,
        };

        Ok(Self {
            category: selected(category),
            date_range,
            location: selected(location),
            weather: selected(weather),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.date_range.is_none()
            && self.location.is_none()
            && self.weather.is_none()
    }

    pub fn matches(&self, ev: &Event) -> bool {
        if !eq_predicate(&self.category, &ev.category) {
            return false;
        }

        if let Some(range) = &self.date_range {
            // an underived / unparsable date can never be inside a range
            match ev.calendar_date() {
                Some(d) if range.contains(d) => {}
                _ => return false,
            }
        }

        eq_predicate(&self.location, &ev.location) && eq_predicate(&self.weather, &ev.weathercondition)
    }

    /// Keep the rows satisfying every selected predicate, preserving order.
    pub fn apply(&self, table: &EventTable) -> EventTable {
        if self.is_empty() {
            return table.clone();
        }
        table.iter().filter(|ev| self.matches(ev)).cloned().collect()
    }
}

fn eq_predicate(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual.as_deref() == Some(w.as_str()),
    }
}

/// Selector choices: `All` followed by the distinct values in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub weather: Vec<String>,
}

pub fn filter_options(table: &EventTable) -> FilterOptions {
    FilterOptions {
        categories: distinct_with_all(table.iter().map(|e| e.category.as_deref())),
        locations: distinct_with_all(table.iter().map(|e| e.location.as_deref())),
        weather: distinct_with_all(table.iter().map(|e| e.weathercondition.as_deref())),
    }
}

fn distinct_with_all<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for v in values.flatten() {
        if !out[1..].iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}
