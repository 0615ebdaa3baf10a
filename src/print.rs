//! Console tabulation of counts, tables and event listings.

use std::fmt::Display;

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::events::EventLog;
use crate::table::{self, Cell};

/// Formats a cell for display: whole numbers without decimals, other numbers to two places.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Number(number) if number.fract() == 0.0 && number.abs() < 1e15 => format!("{number:.0}"),
        Cell::Number(number) => format!("{number:.2}"),
        other => other.to_string(),
    }
}

fn format_coord(coord: Option<f64>) -> String {
    coord.map(|coord| format!("{coord:.2}")).unwrap_or_else(|| "NaN".into())
}

pub fn tabulate_counts<K: Display>(key_header: &str, counts: &[(K, usize)]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(16)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![key_header.into(), "Count".into()],
        ));
    for (key, count) in counts {
        table.push_row(Row::new(
            Styles::default(),
            vec![key.to_string().into(), count.to_string().into()],
        ));
    }
    table
}

pub fn tabulate_table(source: &table::Table) -> Table {
    let mut table = Table::default()
        .with_cols(
            source
                .columns()
                .iter()
                .map(|_| Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)))
                .collect(),
        )
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            source.columns().iter().map(|column| column.as_str().into()).collect(),
        ));
    for row in source.rows() {
        table.push_row(Row::new(
            Styles::default(),
            row.iter().map(|cell| format_cell(cell).into()).collect(),
        ));
    }
    table
}

pub fn tabulate_events(events: &EventLog) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(20)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(10))
                    .with(HAlign::Left),
            ),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Team".into(),
                "Type".into(),
                "Subtype".into(),
                "Period".into(),
                "Time [s]".into(),
                "From".into(),
                "Start X".into(),
                "Start Y".into(),
                "End X".into(),
                "End Y".into(),
            ],
        ));
    for event in events {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                event.team.to_string().into(),
                event.event_type.to_string().into(),
                event.subtype.clone().unwrap_or_default().into(),
                event.period.to_string().into(),
                format!("{:.2}", event.start_time).into(),
                event.from.clone().unwrap_or_default().into(),
                format_coord(event.start.map(|start| start.x)).into(),
                format_coord(event.start.map(|start| start.y)).into(),
                format_coord(event.end.map(|end| end.x)).into(),
                format_coord(event.end.map(|end| end.y)).into(),
            ],
        ));
    }
    table
}
