use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod env;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_database")]
    pub database: String,
    /// Map center as `[lat, lon]`.
    #[serde(default = "default_map_center")]
    pub map_center: [f64; 2],
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Column width used to wrap the chat transcript.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_title() -> String {
    "Seattle Events".to_string()
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_map_center() -> [f64; 2] {
    [47.6504529, -122.3499861]
}
fn default_map_zoom() -> u8 {
    12
}
fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}
fn default_wrap_width() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            database: default_database(),
            map_center: default_map_center(),
            map_zoom: default_map_zoom(),
            chat_model: default_chat_model(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.eventboard`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eventboard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eventboard.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("event_planner.db")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from the file take their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn map_center(&self) -> (f64, f64) {
        (self.map_center[0], self.map_center[1])
    }

    /// Write the config file, with `database` pointing at `db_path`.
    pub fn write_default(db_path: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let config = Config {
            database: db_path.to_string(),
            ..Config::default()
        };

        let yaml = serde_yaml::to_string(&config)?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}
