//! Player-tracking data: one row per frame, with an x/y column pair per player and for the ball.
//!
//! Raw tracking files carry a three-line header: the team name above each player's x column,
//! the jersey numbers, then the column captions (`Period,Frame,Time [s],Player11,,...,Ball,`).
//! Columns are renamed `{Side}_{Number}_x` / `_y` and `ball_x` / `ball_y` on load.

use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use csv::ReaderBuilder;
use tracing::debug;

use crate::config::FieldDimen;
use crate::coords::{Axis, Point, Schema};
use crate::domain::Side;
use crate::error::{ColumnNotFound, DataError, MalformedHeader};
use crate::table::Table;

pub const FRAMES_PER_SECOND: u32 = 25;
pub const FRAME: &str = "Frame";
pub const BALL: &str = "ball";

const HEADER_LINES: usize = 3;
const PLAYER_CAPTION: &str = "Player";
const BALL_CAPTION: &str = "Ball";

/// The number of frames sampled over `duration`.
pub fn frames_in(duration: Duration) -> usize {
    (duration.as_secs_f64() * FRAMES_PER_SECOND as f64).round() as usize
}

pub fn column_name(side: Side, number: u8, axis: Axis) -> String {
    format!("{side}_{number}_{}", axis_suffix(axis))
}

pub fn ball_column_name(axis: Axis) -> String {
    format!("{BALL}_{}", axis_suffix(axis))
}

fn axis_suffix(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingData {
    side: Side,
    players: Vec<u8>,
    table: Table,
}
impl TrackingData {
    /// Reads a raw tracking file for one team.
    pub fn read(reader: impl io::Read) -> Result<Self, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = reader.records();
        let mut header = Vec::with_capacity(HEADER_LINES);
        for line in 0..HEADER_LINES {
            let record = records
                .next()
                .ok_or_else(|| MalformedHeader(format!("expected {HEADER_LINES} header lines, got {line}")))??;
            header.push(record);
        }

        let side = header[0]
            .iter()
            .map(str::trim)
            .find(|cell| !cell.is_empty())
            .ok_or_else(|| MalformedHeader("no team name on the first line".into()))?;
        let side = Side::from_str(side).map_err(|_| MalformedHeader(format!("unknown team '{side}'")))?;

        let players = header[1]
            .iter()
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                u8::from_str(cell).map_err(|_| MalformedHeader(format!("invalid jersey number '{cell}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let columns = caption_columns(side, &players, header[2].iter())?;
        let mut table = Table::new(columns);
        for record in records {
            table.push_row(crate::csv::parse_record(&record?))?;
        }
        debug!(
            "read {} frames of {side} tracking data for {} players",
            table.num_rows(),
            players.len()
        );
        Ok(Self {
            side,
            players,
            table,
        })
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        debug!("reading tracking data from {path:?}");
        Self::read(File::open(path)?)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Jersey numbers, in column order.
    pub fn players(&self) -> &[u8] {
        &self.players
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn num_frames(&self) -> usize {
        self.table.num_rows()
    }

    /// Every player's position columns followed by the ball's.
    pub fn schema(&self) -> Schema {
        Schema::with_pairs(
            self.players
                .iter()
                .map(|&number| {
                    (
                        column_name(self.side, number, Axis::X),
                        column_name(self.side, number, Axis::Y),
                    )
                })
                .chain([(ball_column_name(Axis::X), ball_column_name(Axis::Y))]),
        )
    }

    pub fn to_metric(&mut self, field: &FieldDimen) -> Result<(), ColumnNotFound> {
        let schema = self.schema();
        crate::coords::to_metric(&mut self.table, &schema, field)?;
        Ok(())
    }

    /// Positions of one player over the first `frames` frames. Frames where the player is off the
    /// pitch (or was not tracked) are `None`.
    pub fn trace(&self, number: u8, frames: usize) -> Result<Vec<Option<Point>>, ColumnNotFound> {
        let x = self.table.column_index(&column_name(self.side, number, Axis::X))?;
        let y = self.table.column_index(&column_name(self.side, number, Axis::Y))?;
        Ok(self.positions(x, y, frames))
    }

    pub fn ball_trace(&self, frames: usize) -> Result<Vec<Option<Point>>, ColumnNotFound> {
        let x = self.table.column_index(&ball_column_name(Axis::X))?;
        let y = self.table.column_index(&ball_column_name(Axis::Y))?;
        Ok(self.positions(x, y, frames))
    }

    /// Where every tracked player is at row `frame_index`. Players without a position in that
    /// frame are omitted; an index past the end yields nothing.
    pub fn snapshot(&self, frame_index: usize) -> Vec<(u8, Point)> {
        let Some(row) = self.table.row(frame_index) else {
            return vec![];
        };
        self.players
            .iter()
            .filter_map(|&number| {
                let x = self.table.column_index(&column_name(self.side, number, Axis::X)).ok()?;
                let y = self.table.column_index(&column_name(self.side, number, Axis::Y)).ok()?;
                Some((number, Point::new(row[x].as_number()?, row[y].as_number()?)))
            })
            .collect()
    }

    fn positions(&self, x: usize, y: usize, frames: usize) -> Vec<Option<Point>> {
        self.table
            .rows()
            .take(frames)
            .map(|row| match (row[x].as_number(), row[y].as_number()) {
                (Some(x), Some(y)) => Some(Point::new(x, y)),
                _ => None,
            })
            .collect()
    }
}

/// Renames the caption line: each `Player…` caption and the blank caption after it become a
/// player's x/y pair, numbered from `players` in order; `Ball` and the caption after it become
/// the ball's pair; everything else is kept verbatim.
fn caption_columns<'a>(
    side: Side,
    players: &[u8],
    captions: impl Iterator<Item = &'a str>,
) -> Result<Vec<String>, MalformedHeader> {
    let captions = captions.map(str::trim).collect::<Vec<_>>();
    let mut columns = Vec::with_capacity(captions.len());
    let mut players = players.iter();
    let mut index = 0;
    while index < captions.len() {
        let caption = captions[index];
        if caption.starts_with(PLAYER_CAPTION) {
            let &number = players
                .next()
                .ok_or_else(|| MalformedHeader(format!("more player captions than jersey numbers at '{caption}'")))?;
            columns.push(column_name(side, number, Axis::X));
            columns.push(column_name(side, number, Axis::Y));
            index += 2;
        } else if caption == BALL_CAPTION {
            columns.push(ball_column_name(Axis::X));
            columns.push(ball_column_name(Axis::Y));
            index += 2;
        } else {
            columns.push(caption.to_string());
            index += 1;
        }
    }
    if players.next().is_some() {
        return Err(MalformedHeader("more jersey numbers than player captions".into()));
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;
    use assert_float_eq::*;

    const SAMPLE: &str = "\
,,,Home,,Home,,Home,,,
,,,11,,1,,2,,,
Period,Frame,Time [s],Player11,,Player1,,Player2,,Ball,
1,1,0.04,0.00082,0.48238,0.32648,0.65322,0.33701,0.48863,0.45472,0.38709
1,2,0.08,0.00096,0.48238,0.32648,0.65322,0.33701,0.48863,0.49645,0.40656
1,3,0.12,0.00114,0.48238,NaN,NaN,0.33701,0.48863,0.53716,0.42556
";

    fn sample() -> TrackingData {
        TrackingData::read(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn header_renamed() {
        let tracking = sample();
        assert_eq!(Side::Home, tracking.side());
        assert_eq!(&[11, 1, 2], tracking.players());
        assert_eq!(
            vec![
                "Period", "Frame", "Time [s]", "Home_11_x", "Home_11_y", "Home_1_x", "Home_1_y", "Home_2_x",
                "Home_2_y", "ball_x", "ball_y"
            ],
            tracking.table().columns()
        );
        assert_eq!(3, tracking.num_frames());
    }

    #[test]
    fn away_side() {
        let sample = "\
,,,Away,,Away,
,,,25,,15,
Period,Frame,Time [s],Player25,,Player15,,Ball,
1,1,0.04,0.9,0.5,0.6,0.4,NaN,NaN
";
        let tracking = TrackingData::read(sample.as_bytes()).unwrap();
        assert_eq!(Side::Away, tracking.side());
        assert_eq!(&[25, 15], tracking.players());
        assert_eq!("Away_25_x", tracking.table().columns()[3]);
    }

    #[test]
    fn truncated_header_rejected() {
        let err = TrackingData::read(",,,Home,\n,,,11,\n".as_bytes()).unwrap_err();
        assert_eq!(
            "malformed header: expected 3 header lines, got 2",
            err.to_string()
        );
    }

    #[test]
    fn jersey_mismatch_rejected() {
        let sample = "\
,,,Home,,Home,
,,,11,,
Period,Frame,Time [s],Player11,,Player1,,Ball,
";
        let err = TrackingData::read(sample.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("more player captions than jersey numbers"));
    }

    #[test]
    fn to_metric_rewrites_positions_only() {
        let mut tracking = sample();
        tracking.to_metric(&FieldDimen::default()).unwrap();
        let table = tracking.table();
        assert_eq!(Cell::Number(1.0), table[(0, 1)]);
        assert_eq!(Cell::Number(0.04), table[(0, 2)]);
        let x = table[(0, 3)].as_number().unwrap();
        assert_float_absolute_eq!((0.00082 - 0.5) * 106.0, x, 1e-9);
        let ball_y = table[(0, 10)].as_number().unwrap();
        assert_float_absolute_eq!((0.38709 - 0.5) * 68.0, ball_y, 1e-9);
        assert_eq!(Cell::Missing, table[(2, 5)]);
    }

    #[test]
    fn trace_first_frames() {
        let tracking = sample();
        let trace = tracking.trace(1, 10).unwrap();
        assert_eq!(3, trace.len());
        assert_eq!(Some(Point::new(0.32648, 0.65322)), trace[0]);
        assert_eq!(None, trace[2]);

        assert_eq!(2, tracking.trace(11, 2).unwrap().len());
        assert_eq!(
            ColumnNotFound("Home_7_x".into()),
            tracking.trace(7, 10).unwrap_err()
        );
        assert_eq!(Some(Point::new(0.45472, 0.38709)), tracking.ball_trace(1).unwrap()[0]);
    }

    #[test]
    fn snapshot_omits_missing() {
        let tracking = sample();
        let snapshot = tracking.snapshot(2);
        assert_eq!(
            vec![11, 2],
            snapshot.iter().map(|(number, _)| *number).collect::<Vec<_>>()
        );
        assert!(tracking.snapshot(3).is_empty());
    }

    #[test]
    fn frames_in_duration() {
        assert_eq!(1500, frames_in(Duration::from_secs(60)));
        assert_eq!(13, frames_in(Duration::from_millis(500)));
    }
}
