#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use eventboard::core::derive::derive_features;
use eventboard::models::event::Event;
use eventboard::models::events::EventTable;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn evb() -> Command {
    let mut cmd = cargo_bin_cmd!("eventboard");
    // keep the user's real config and secrets out of the tests
    cmd.env("HOME", env::temp_dir())
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_API_BASE")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eventboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// (id, title, date, details, category, location, geolocation, weather)
pub type Row<'a> = (
    i64,
    &'a str,
    &'a str,
    &'a str,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
);

pub const SAMPLE: [Row<'static>; 5] = [
    (
        1,
        "Jazz Night",
        "2024-01-01",
        "Live jazz",
        Some("Music"),
        Some("Capitol Hill"),
        Some("{47.6,-122.3}"),
        Some("Rain"),
    ),
    (
        2,
        "Book Fair",
        "2024-01-15",
        "Used books",
        Some("Literature"),
        Some("Fremont"),
        Some("{47.65,-122.35}"),
        Some("Cloudy"),
    ),
    (
        3,
        "Symphony",
        "2024-02-01",
        "Beethoven",
        Some("Music"),
        Some("Downtown"),
        Some("invalid"),
        Some("Rain"),
    ),
    (
        4,
        "Street Market",
        "2024-02-10",
        "Local food",
        Some("Food"),
        Some("Fremont"),
        None,
        Some("Sunny"),
    ),
    (
        5,
        "Mystery Gig",
        "sometime soon",
        "TBA",
        Some("Music"),
        None,
        Some("{47.61,-122.33}"),
        None,
    ),
];

/// Initialize the DB through the library and insert `rows`.
pub fn seed_db(db_path: &str, rows: &[Row]) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    eventboard::db::initialize::init_db(&conn).expect("init db");
    for r in rows {
        conn.execute(
            "INSERT INTO events (id, title, date, details, category, location, geolocation, weathercondition)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![r.0, r.1, r.2, r.3, r.4, r.5, r.6, r.7],
        )
        .expect("insert event");
    }
}

pub fn event_from(r: &Row) -> Event {
    Event {
        id: r.0,
        row: 0,
        title: r.1.to_string(),
        date: r.2.to_string(),
        details: r.3.to_string(),
        category: r.4.map(str::to_string),
        location: r.5.map(str::to_string),
        geolocation: r.6.map(str::to_string),
        weathercondition: r.7.map(str::to_string),
        derived: None,
    }
}

/// The sample rows as an in-memory, derived table.
pub fn sample_table() -> EventTable {
    let mut table = EventTable::new(SAMPLE.iter().map(event_from).collect());
    derive_features(&mut table);
    table
}
