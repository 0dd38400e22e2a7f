use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::events::EventTable;
use rusqlite::{Result, Row, Statement};
use tracing::debug;

/// The dashboard's single read query.
pub const EVENTS_QUERY: &str = "SELECT * FROM events";

/// Column positions resolved once per statement.
/// Optional columns may be absent from the queried view; they then read as NULL.
struct Columns {
    id: usize,
    title: usize,
    date: usize,
    details: usize,
    category: Option<usize>,
    location: Option<usize>,
    geolocation: Option<usize>,
    weathercondition: Option<usize>,
}

impl Columns {
    fn resolve(stmt: &Statement) -> Result<Self> {
        Ok(Self {
            id: stmt.column_index("id")?,
            title: stmt.column_index("title")?,
            date: stmt.column_index("date")?,
            details: stmt.column_index("details")?,
            category: stmt.column_index("category").ok(),
            location: stmt.column_index("location").ok(),
            geolocation: stmt.column_index("geolocation").ok(),
            weathercondition: stmt.column_index("weathercondition").ok(),
        })
    }
}

/// Run `query` once and return every row as an in-memory table.
/// No retries: a store or query failure surfaces as `AppError::DataAccess`.
pub fn load_data(pool: &DbPool, query: &str) -> AppResult<EventTable> {
    let mut stmt = pool.conn.prepare(query)?;
    let cols = Columns::resolve(&stmt)?;

    let rows = stmt.query_map([], |row| map_row(row, &cols))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    debug!(rows = out.len(), query, "loaded events");
    Ok(EventTable::new(out))
}

fn map_row(row: &Row, cols: &Columns) -> Result<Event> {
    Ok(Event {
        id: row.get(cols.id)?,
        row: 0,
        title: opt_text(row, Some(cols.title))?.unwrap_or_default(),
        date: opt_text(row, Some(cols.date))?.unwrap_or_default(),
        details: opt_text(row, Some(cols.details))?.unwrap_or_default(),
        category: opt_text(row, cols.category)?,
        location: opt_text(row, cols.location)?,
        geolocation: opt_text(row, cols.geolocation)?,
        weathercondition: opt_text(row, cols.weathercondition)?,
        derived: None,
    })
}

fn opt_text(row: &Row, idx: Option<usize>) -> Result<Option<String>> {
    match idx {
        Some(i) => row.get::<_, Option<String>>(i),
        None => Ok(None),
    }
}
