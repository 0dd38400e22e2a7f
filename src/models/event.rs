use chrono::NaiveDate;
use serde::Serialize;

/// One row of the `events` table, plus the fields derived from its date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: i64,
    /// Position in the table as loaded; kept unchanged through filtering.
    #[serde(skip)]
    pub row: usize,
    pub title: String,
    pub date: String, // ⇔ events.date (TEXT, raw as stored)
    pub details: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub geolocation: Option<String>, // ⇔ "{lat,lon}"
    pub weathercondition: Option<String>,

    /// Filled by the feature deriver; `None` while underived or when the
    /// raw date does not parse.
    #[serde(flatten)]
    pub derived: Option<DateParts>,
}

/// Temporal fields computed from `Event::date`. Never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateParts {
    #[serde(rename = "parsed_date")]
    pub date: NaiveDate,
    pub month: u32,
    pub year: i32,
    pub day_of_week: String,
    pub day_of_week_num: u32, // 0 = Monday .. 6 = Sunday
}

impl Event {
    pub fn new(id: i64, title: &str, date: &str, details: &str) -> Self {
        Self {
            id,
            row: 0,
            title: title.to_string(),
            date: date.to_string(),
            details: details.to_string(),
            category: None,
            location: None,
            geolocation: None,
            weathercondition: None,
            derived: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_geolocation(mut self, geolocation: &str) -> Self {
        self.geolocation = Some(geolocation.to_string());
        self
    }

    pub fn with_weather(mut self, weather: &str) -> Self {
        self.weathercondition = Some(weather.to_string());
        self
    }

    /// Calendar date, available once derived.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.derived.as_ref().map(|d| d.date)
    }

    /// `YYYY-MM-DD` when the date parsed, the raw text otherwise.
    pub fn date_str(&self) -> String {
        match self.calendar_date() {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => self.date.clone(),
        }
    }
}
