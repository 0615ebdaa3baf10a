//! Conversion between normalised dataset coordinates, in which the field spans `[0, 1] × [0, 1]`,
//! and metric coordinates, in metres with the origin at the centre spot.
//!
//! Which columns hold positions is declared up front in a [Schema] and checked against the
//! table before anything is rewritten.

use crate::config::FieldDimen;
use crate::error::ColumnNotFound;
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_metric(&self, field: &FieldDimen) -> Self {
        Self {
            x: to_metric_value(self.x, field.length),
            y: to_metric_value(self.y, field.width),
        }
    }

    pub fn to_normalised(&self, field: &FieldDimen) -> Self {
        Self {
            x: to_normalised_value(self.x, field.length),
            y: to_normalised_value(self.y, field.width),
        }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[inline]
pub fn to_metric_value(normalised: f64, axis_length: f64) -> f64 {
    (normalised - 0.5) * axis_length
}

#[inline]
pub fn to_normalised_value(metric: f64, axis_length: f64) -> f64 {
    metric / axis_length + 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along the length of the field, goal to goal.
    X,
    /// Across the width of the field, touchline to touchline.
    Y,
}
impl Axis {
    /// The axis denoted by a column name, judged by its last character alone.
    pub fn of_column(name: &str) -> Option<Axis> {
        match name.chars().last()? {
            'x' | 'X' => Some(Axis::X),
            'y' | 'Y' => Some(Axis::Y),
            _ => None,
        }
    }

    pub fn length_in(&self, field: &FieldDimen) -> f64 {
        match self {
            Axis::X => field.length,
            Axis::Y => field.width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionColumn {
    pub name: String,
    pub axis: Axis,
}

/// The declared set of position columns in a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    columns: Vec<PositionColumn>,
}
impl Schema {
    /// Declares `(x column, y column)` pairs.
    pub fn with_pairs<I, X, Y>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<String>,
        Y: Into<String>,
    {
        let columns = pairs
            .into_iter()
            .flat_map(|(x, y)| {
                [
                    PositionColumn {
                        name: x.into(),
                        axis: Axis::X,
                    },
                    PositionColumn {
                        name: y.into(),
                        axis: Axis::Y,
                    },
                ]
            })
            .collect();
        Self { columns }
    }

    /// Declares every column whose name ends in `x` or `y` (in either case) as a position column
    /// on that axis. Any column named this way is treated as a position, whether or not it
    /// actually holds one.
    pub fn by_suffix<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let columns = columns
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                Axis::of_column(name).map(|axis| PositionColumn {
                    name: name.to_string(),
                    axis,
                })
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[PositionColumn] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolves every declared column against `table`, failing on the first one it lacks. A column
    /// declared more than once is bound once, on the axis of its first declaration.
    pub fn bind(&self, table: &Table) -> Result<BoundSchema, ColumnNotFound> {
        let mut ordinals: Vec<(usize, Axis)> = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let col = table.column_index(&column.name)?;
            if !ordinals.iter().any(|&(bound, _)| bound == col) {
                ordinals.push((col, column.axis));
            }
        }
        Ok(BoundSchema { ordinals })
    }
}

/// A [Schema] whose columns have been located in a specific table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundSchema {
    ordinals: Vec<(usize, Axis)>,
}
impl BoundSchema {
    pub fn ordinals(&self) -> &[(usize, Axis)] {
        &self.ordinals
    }
}

/// Rewrites the position columns of `table` in place, from normalised to metric coordinates.
/// Missing cells stay missing and text cells are left untouched.
pub fn to_metric<'a>(
    table: &'a mut Table,
    schema: &Schema,
    field: &FieldDimen,
) -> Result<&'a mut Table, ColumnNotFound> {
    let bound = schema.bind(table)?;
    transform(table, &bound, field, to_metric_value);
    Ok(table)
}

/// The inverse of [to_metric].
pub fn to_normalised<'a>(
    table: &'a mut Table,
    schema: &Schema,
    field: &FieldDimen,
) -> Result<&'a mut Table, ColumnNotFound> {
    let bound = schema.bind(table)?;
    transform(table, &bound, field, to_normalised_value);
    Ok(table)
}

fn transform(table: &mut Table, bound: &BoundSchema, field: &FieldDimen, f: fn(f64, f64) -> f64) {
    for &(col, axis) in bound.ordinals() {
        let axis_length = axis.length_in(field);
        table.apply_column(col, |cell| cell.map_number(|value| f(value, axis_length)));
    }
}
