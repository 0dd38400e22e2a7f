//! Horizontal bar chart of event counts per group.

use crate::models::event::Event;
use crate::models::events::EventTable;
use ansi_term::Colour;
use clap::ValueEnum;
use serde::Serialize;

const BAR_WIDTH: usize = 40;
const UNKNOWN: &str = "(none)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartAxis {
    Category,
    Location,
    Weather,
    Month,
    Year,
    Weekday,
}

impl ChartAxis {
    pub fn title(&self) -> &'static str {
        match self {
            ChartAxis::Category => "Events by category",
            ChartAxis::Location => "Events by location",
            ChartAxis::Weather => "Events by weather condition",
            ChartAxis::Month => "Events by month",
            ChartAxis::Year => "Events by year",
            ChartAxis::Weekday => "Events by day of week",
        }
    }

    /// Grouping key plus a sort key; derived axes sort chronologically.
    fn key(&self, ev: &Event) -> (i64, String) {
        let d = ev.derived.as_ref();
        let text = |v: &Option<String>| v.clone().unwrap_or_else(|| UNKNOWN.to_string());
        match self {
            ChartAxis::Category => (0, text(&ev.category)),
            ChartAxis::Location => (0, text(&ev.location)),
            ChartAxis::Weather => (0, text(&ev.weathercondition)),
            ChartAxis::Month => d.map_or((i64::MAX, UNKNOWN.into()), |d| {
                (d.month.into(), format!("{:02}", d.month))
            }),
            ChartAxis::Year => d.map_or((i64::MAX, UNKNOWN.into()), |d| {
                (d.year.into(), d.year.to_string())
            }),
            ChartAxis::Weekday => d.map_or((i64::MAX, UNKNOWN.into()), |d| {
                (d.day_of_week_num.into(), d.day_of_week.clone())
            }),
        }
    }

    fn ordered(&self) -> bool {
        matches!(self, ChartAxis::Month | ChartAxis::Year | ChartAxis::Weekday)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: usize,
}

/// Count rows per group. Categorical axes keep first-seen order.
pub fn count_by(table: &EventTable, axis: ChartAxis) -> Vec<Bar> {
    let mut groups: Vec<(i64, Bar)> = Vec::new();

    for ev in table {
        let (order, label) = axis.key(ev);
        match groups.iter_mut().find(|(_, b)| b.label == label) {
            Some((_, bar)) => bar.count += 1,
            None => groups.push((order, Bar { label, count: 1 })),
        }
    }

    if axis.ordered() {
        groups.sort_by_key(|(order, _)| *order);
    }
    groups.into_iter().map(|(_, b)| b).collect()
}

pub fn render_chart(title: &str, bars: &[Bar]) -> String {
    let mut out = format!("{}\n\n", Colour::Cyan.bold().paint(title));

    let Some(max) = bars.iter().map(|b| b.count).max() else {
        out.push_str("No events to chart\n");
        return out;
    };
    let label_w = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);

    for bar in bars {
        let len = (bar.count * BAR_WIDTH).div_ceil(max);
        out.push_str(&format!(
            "{:<label_w$} | {} {}\n",
            bar.label,
            Colour::Blue.paint("█".repeat(len)),
            bar.count,
            label_w = label_w
        ));
    }
    out
}
