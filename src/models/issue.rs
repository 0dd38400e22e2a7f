use serde::Serialize;
use std::fmt;

/// A row whose raw date could not be parsed. Row-scoped, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseIssue {
    pub row: usize,
    pub id: i64,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error parsing date for row {} (id {}): '{}' ({})",
            self.row, self.id, self.value, self.reason
        )
    }
}

/// A row whose geolocation is present but not a `{lat,lon}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoIssue {
    pub row: usize,
    pub id: i64,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for GeoIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error parsing geolocation for row {} (id {}): '{}' ({})",
            self.row, self.id, self.value, self.reason
        )
    }
}
