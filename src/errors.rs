//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Row-scoped problems (a bad date, a bad geolocation) are NOT errors here:
//! they are collected as `ParseIssue` / `GeoIssue` values and reported while
//! the render continues.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Data access error: {0}")]
    DataAccess(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors (user input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Unknown grid column: {0}")]
    UnknownColumn(String),

    // ---------------------------
    // Chat errors
    // ---------------------------
    #[error("Chat is not configured: {0}")]
    ChatConfig(String),

    #[error("Chat request failed: {0}")]
    ChatRequest(#[from] reqwest::Error),

    #[error("Chat response invalid: {0}")]
    ChatResponse(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
