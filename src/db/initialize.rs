use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::debug;

/// Create the `events` table if missing.
///
/// The dashboard itself only reads; this exists so a fresh database can be
/// bootstrapped with the columns the loader expects.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS events (
            id               INTEGER PRIMARY KEY,
            title            TEXT NOT NULL,
            date             TEXT NOT NULL,          -- YYYY-MM-DD
            details          TEXT NOT NULL,
            category         TEXT,
            location         TEXT,
            geolocation      TEXT,                   -- {lat,lon}
            weathercondition TEXT
        );
        ",
    )?;
    debug!("events table ensured");
    Ok(())
}
