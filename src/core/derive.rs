//! Feature deriver: month / year / weekday fields from the raw date text.

use crate::models::event::DateParts;
use crate::models::events::EventTable;
use crate::models::issue::ParseIssue;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

const DATE_FORMATS: [&str; 1] = ["%Y-%m-%d"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a stored date. Time components, when present, are dropped.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    for f in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return Some(d);
        }
    }

    for f in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

pub fn date_parts(date: NaiveDate) -> DateParts {
    DateParts {
        date,
        month: date.month(),
        year: date.year(),
        day_of_week: date.format("%A").to_string(),
        day_of_week_num: date.weekday().num_days_from_monday(),
    }
}

/// Derive temporal fields for every row, in place.
///
/// A row whose date does not parse is degraded (`derived = None`) and
/// reported; the rest of the table is still processed. Running it twice
/// gives the same fields.
pub fn derive_features(table: &mut EventTable) -> Vec<ParseIssue> {
    let mut issues = Vec::new();

    for ev in &mut table.rows {
        match parse_event_date(&ev.date) {
            Some(d) => ev.derived = Some(date_parts(d)),
            None => {
                ev.derived = None;
                let issue = ParseIssue {
                    row: ev.row,
                    id: ev.id,
                    value: ev.date.clone(),
                    reason: "expected YYYY-MM-DD".to_string(),
                };
                debug!(row = ev.row, id = ev.id, value = %ev.date, "unparsable event date");
                issues.push(issue);
            }
        }
    }

    issues
}
