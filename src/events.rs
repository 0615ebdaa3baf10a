//! The match event log: one record per on-ball action, with start and end positions.

use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::FieldDimen;
use crate::coords::{Point, Schema};
use crate::domain::{EventType, Side};
use crate::error::{DataError, InvalidCell};
use crate::table::{Cell, Table};
use crate::{coords, csv};

pub const TEAM: &str = "Team";
pub const TYPE: &str = "Type";
pub const SUBTYPE: &str = "Subtype";
pub const PERIOD: &str = "Period";
pub const START_FRAME: &str = "Start Frame";
pub const START_TIME: &str = "Start Time [s]";
pub const END_FRAME: &str = "End Frame";
pub const END_TIME: &str = "End Time [s]";
pub const FROM: &str = "From";
pub const TO: &str = "To";
pub const START_X: &str = "Start X";
pub const START_Y: &str = "Start Y";
pub const END_X: &str = "End X";
pub const END_Y: &str = "End Y";

/// Marks a shot that ended in a goal, e.g. `ON TARGET-GOAL` or `HEAD-ON TARGET-GOAL`.
pub const GOAL_MARKER: &str = "-GOAL";

pub fn schema() -> Schema {
    Schema::with_pairs([(START_X, START_Y), (END_X, END_Y)])
}

/// Reads the raw event log and converts its positions to metric coordinates.
pub fn read_from_file(path: impl AsRef<Path>, field: &FieldDimen) -> Result<EventLog, DataError> {
    let mut table = csv::read_table_from_file(path)?;
    coords::to_metric(&mut table, &schema(), field)?;
    EventLog::try_from(&table)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub team: Side,
    pub event_type: EventType,
    pub subtype: Option<String>,
    pub period: u8,
    pub start_frame: u32,
    pub start_time: f64,
    pub end_frame: u32,
    pub end_time: f64,
    pub from: Option<String>,
    pub to: Option<String>,
    pub start: Option<Point>,
    pub end: Option<Point>,
}
impl Event {
    pub fn is_goal(&self) -> bool {
        self.subtype
            .as_ref()
            .map(|subtype| subtype.contains(GOAL_MARKER))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventLog {
    events: Vec<Event>,
}
impl EventLog {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn for_team(&self, team: Side) -> EventLog {
        self.retain(|event| event.team == team)
    }

    pub fn of_type(&self, event_type: &EventType) -> EventLog {
        self.retain(|event| &event.event_type == event_type)
    }

    pub fn goals(&self) -> EventLog {
        self.retain(|event| event.event_type == EventType::Shot && event.is_goal())
    }

    pub fn type_counts(&self) -> Vec<(EventType, usize)> {
        value_counts(self.events.iter().map(|event| event.event_type.clone()))
    }

    /// Counts by subtype. Events without a subtype are not counted.
    pub fn subtype_counts(&self) -> Vec<(String, usize)> {
        value_counts(self.events.iter().filter_map(|event| event.subtype.clone()))
    }

    fn retain(&self, mut predicate: impl FnMut(&Event) -> bool) -> EventLog {
        EventLog {
            events: self
                .events
                .iter()
                .filter(|event| predicate(event))
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<Event>> for EventLog {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl TryFrom<&Table> for EventLog {
    type Error = DataError;

    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        let ordinals = Ordinals::locate(table)?;
        let events = table
            .rows()
            .enumerate()
            .map(|(row_index, row)| ordinals.read(row_index, row))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("read {} events", events.len());
        Ok(Self { events })
    }
}

/// Tallies `items`, most frequent first; ties are ordered by key.
pub fn value_counts<K: Hash + Eq + Ord>(items: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    let mut counts = counts.into_iter().collect::<Vec<_>>();
    counts.sort_by(|(a_key, a_count), (b_key, b_count)| b_count.cmp(a_count).then_with(|| a_key.cmp(b_key)));
    counts
}

struct Ordinals {
    team: usize,
    event_type: usize,
    subtype: usize,
    period: usize,
    start_frame: usize,
    start_time: usize,
    end_frame: usize,
    end_time: usize,
    from: usize,
    to: usize,
    start: (usize, usize),
    end: (usize, usize),
}
impl Ordinals {
    fn locate(table: &Table) -> Result<Self, DataError> {
        Ok(Self {
            team: table.column_index(TEAM)?,
            event_type: table.column_index(TYPE)?,
            subtype: table.column_index(SUBTYPE)?,
            period: table.column_index(PERIOD)?,
            start_frame: table.column_index(START_FRAME)?,
            start_time: table.column_index(START_TIME)?,
            end_frame: table.column_index(END_FRAME)?,
            end_time: table.column_index(END_TIME)?,
            from: table.column_index(FROM)?,
            to: table.column_index(TO)?,
            start: (table.column_index(START_X)?, table.column_index(START_Y)?),
            end: (table.column_index(END_X)?, table.column_index(END_Y)?),
        })
    }

    fn read(&self, row_index: usize, row: &[Cell]) -> Result<Event, InvalidCell> {
        let reader = RowReader { row_index, row };
        Ok(Event {
            team: reader.parse(self.team, TEAM, "a team side")?,
            event_type: reader.parse(self.event_type, TYPE, "an event type")?,
            subtype: reader.optional_text(self.subtype),
            period: reader.integer(self.period, PERIOD)? as u8,
            start_frame: reader.integer(self.start_frame, START_FRAME)?,
            start_time: reader.number(self.start_time, START_TIME)?,
            end_frame: reader.integer(self.end_frame, END_FRAME)?,
            end_time: reader.number(self.end_time, END_TIME)?,
            from: reader.optional_text(self.from),
            to: reader.optional_text(self.to),
            start: reader.point(self.start),
            end: reader.point(self.end),
        })
    }
}

struct RowReader<'a> {
    row_index: usize,
    row: &'a [Cell],
}
impl<'a> RowReader<'a> {
    fn invalid(&self, col: usize, column: &str, expected: &'static str) -> InvalidCell {
        InvalidCell {
            row: self.row_index,
            column: column.to_string(),
            expected,
            actual: self.row[col].to_string(),
        }
    }

    fn parse<T: FromStr>(&self, col: usize, column: &str, expected: &'static str) -> Result<T, InvalidCell> {
        match &self.row[col] {
            Cell::Text(text) => T::from_str(text).map_err(|_| self.invalid(col, column, expected)),
            _ => Err(self.invalid(col, column, expected)),
        }
    }

    fn optional_text(&self, col: usize) -> Option<String> {
        match &self.row[col] {
            Cell::Missing => None,
            cell => Some(cell.to_string()),
        }
    }

    fn number(&self, col: usize, column: &str) -> Result<f64, InvalidCell> {
        self.row[col]
            .as_number()
            .ok_or_else(|| self.invalid(col, column, "a number"))
    }

    fn integer(&self, col: usize, column: &str) -> Result<u32, InvalidCell> {
        match self.row[col].as_number() {
            Some(number) if number >= 0.0 && number.fract() == 0.0 && number <= u32::MAX as f64 => Ok(number as u32),
            _ => Err(self.invalid(col, column, "a non-negative integer")),
        }
    }

    fn point(&self, (x, y): (usize, usize)) -> Option<Point> {
        match (self.row[x].as_number(), self.row[y].as_number()) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests;
