use super::event::Event;
use serde::Serialize;

/// In-memory result of one read query. Row order is the store's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventTable {
    pub rows: Vec<Event>,
}

impl EventTable {
    /// Table as loaded: every row is numbered by its position.
    pub fn new(mut rows: Vec<Event>) -> Self {
        for (pos, ev) in rows.iter_mut().enumerate() {
            ev.row = pos;
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.rows.iter()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.rows.iter().map(|e| e.id).collect()
    }
}

/// Collects rows as they are, keeping their loaded positions.
impl FromIterator<Event> for EventTable {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
