//! Map renderer: one marker per row with a usable `{lat,lon}` geolocation.
//!
//! Each row produces an explicit `GeoOutcome`; the outcomes are folded into a
//! `MapReport` so the caller decides whether to print, log or ignore issues.

use crate::models::event::Event;
use crate::models::events::EventTable;
use crate::models::issue::GeoIssue;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapOptions {
    pub center: (f64, f64),
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub event_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeoOutcome {
    Placed(Marker),
    /// NULL geolocation: nothing to place, nothing to report.
    Missing,
    Invalid(GeoIssue),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapReport {
    pub options: MapOptions,
    pub markers: Vec<Marker>,
    pub issues: Vec<GeoIssue>,
    pub missing: usize,
}

/// Parse `"{lat,lon}"`: braces stripped, exactly two float components.
pub fn parse_geolocation(raw: &str) -> Result<(f64, f64), String> {
    let inner = raw.trim().trim_matches(|c: char| c == '{' || c == '}');
    let parts: Vec<&str> = inner.split(',').collect();

    if parts.len() != 2 {
        return Err(format!("expected 2 components, found {}", parts.len()));
    }

    let lat = parse_component(parts[0])?;
    let lon = parse_component(parts[1])?;
    Ok((lat, lon))
}

fn parse_component(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s.trim()))?;
    if !v.is_finite() {
        return Err(format!("'{}' is not a finite number", s.trim()));
    }
    Ok(v)
}

pub fn marker_label(ev: &Event) -> String {
    format!("{} - {}", ev.title, ev.date_str())
}

/// Issues carry the row's loaded position, so they line up with date issues.
pub fn place_event(ev: &Event) -> GeoOutcome {
    // a present but blank value is still a bad value
    let Some(raw) = ev.geolocation.as_deref() else {
        return GeoOutcome::Missing;
    };

    match parse_geolocation(raw) {
        Ok((lat, lon)) => GeoOutcome::Placed(Marker {
            event_id: ev.id,
            lat,
            lon,
            label: marker_label(ev),
        }),
        Err(reason) => GeoOutcome::Invalid(GeoIssue {
            row: ev.row,
            id: ev.id,
            value: raw.to_string(),
            reason,
        }),
    }
}

/// Place every row. A bad row never stops the others.
pub fn render_map(table: &EventTable, options: MapOptions) -> MapReport {
    let mut report = MapReport {
        options,
        markers: Vec::new(),
        issues: Vec::new(),
        missing: 0,
    };

    for ev in table {
        match place_event(ev) {
            GeoOutcome::Placed(m) => report.markers.push(m),
            GeoOutcome::Missing => report.missing += 1,
            GeoOutcome::Invalid(issue) => {
                debug!(row = issue.row, id = issue.id, value = %issue.value, "unparsable geolocation");
                report.issues.push(issue);
            }
        }
    }

    debug!(
        markers = report.markers.len(),
        issues = report.issues.len(),
        missing = report.missing,
        "map rendered"
    );
    report
}
